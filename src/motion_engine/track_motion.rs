use log::debug;

use crate::fixed_math::{sin_deg, Fx};
use crate::input::InputState;
use crate::motion_engine::{
    config::MotionConfig,
    types::{OpponentCar, Player, OPPONENT_SLOTS},
    MotionEngine, MotionEngineFull, MotionEngineIterator,
};

/// Motion model for the 2.5D racing track.
///
/// Le joueur se déplace latéralement et change de vitesse selon les
/// intentions maintenues ; les adversaires défilent en profondeur à la
/// vitesse relative du joueur, oscillent latéralement, et rebouclent aux
/// extrémités de la piste (illusion de circuit infini avec un jeu borné
/// de sources recyclées).
#[derive(Debug)]
pub struct TrackMotionEngine {
    player: Player,
    opponents: [OpponentCar; OPPONENT_SLOTS],

    config: MotionConfig,

    // Constantes de la config converties une fois en fixed-point
    lateral_step: Fx,
    lateral_bound: Fx,
    speed_step: Fx,
    min_speed: Fx,
    max_speed: Fx,
    track_half_length: Fx,
    weave_frequency: Fx,
    weave_amplitude: Fx,
}

impl TrackMotionEngine {
    pub fn new(config: &MotionConfig) -> Self {
        let mut engine = Self {
            player: Player::default(),
            opponents: [OpponentCar::default(); OPPONENT_SLOTS],
            config: config.clone(),
            lateral_step: Fx::ZERO,
            lateral_bound: Fx::ZERO,
            speed_step: Fx::ZERO,
            min_speed: Fx::ZERO,
            max_speed: Fx::ZERO,
            track_half_length: Fx::ZERO,
            weave_frequency: Fx::ZERO,
            weave_amplitude: Fx::ZERO,
        };
        engine.apply_config(config);
        engine.player.x = Fx::from_num(config.player_start_x);
        engine.player.y = Fx::from_num(config.player_start_y);
        engine
    }

    fn apply_config(&mut self, config: &MotionConfig) {
        self.config = config.clone();
        self.lateral_step = Fx::from_num(config.lateral_step);
        self.lateral_bound = Fx::from_num(config.lateral_bound);
        self.speed_step = Fx::from_num(config.speed_step);
        self.min_speed = Fx::from_num(config.min_speed);
        self.max_speed = Fx::from_num(config.max_speed);
        self.track_half_length = Fx::from_num(config.track_half_length);
        self.weave_frequency = Fx::from_num(config.weave_frequency);
        self.weave_amplitude = Fx::from_num(config.weave_amplitude);
    }

    fn update_player(&mut self, input: &InputState) {
        if input.left_held {
            self.player.x = (self.player.x - self.lateral_step).max(-self.lateral_bound);
        }
        if input.right_held {
            self.player.x = (self.player.x + self.lateral_step).min(self.lateral_bound);
        }
        if input.accelerate_held {
            self.player.speed = (self.player.speed + self.speed_step).min(self.max_speed);
        }
        if input.brake_held {
            self.player.speed = (self.player.speed - self.speed_step).max(self.min_speed);
        }
    }

    fn update_opponents(&mut self) {
        let relative_speed = self.player.speed;

        for car in self.opponents.iter_mut().filter(|c| c.active) {
            // Défilement relatif : les sources se rapprochent quand le
            // joueur accélère (ce n'est pas leur propulsion propre).
            car.z -= relative_speed;

            // Ondulation latérale fonction de la profondeur
            car.x += sin_deg(car.z * self.weave_frequency) * self.weave_amplitude;

            // Rebouclage aux extrémités de la piste
            if car.z < -self.track_half_length {
                car.z = self.track_half_length;
            } else if car.z > self.track_half_length {
                car.z = -self.track_half_length;
            }
        }
    }
}

impl MotionEngine for TrackMotionEngine {
    fn update(&mut self, input: &InputState) {
        self.update_player(input);
        self.update_opponents();
    }

    fn player(&self) -> &Player {
        &self.player
    }

    fn spawn_opponent(&mut self, x: Fx, y: Fx, z: Fx, speed: Fx) {
        for car in &mut self.opponents {
            if !car.active {
                car.x = x;
                car.y = y;
                car.z = z;
                car.speed = speed;
                car.active = true;
                debug!("🚗 Opponent spawned at (x={}, y={}, z={})", x, y, z);
                return;
            }
        }
        debug!("🚗 All opponent slots busy, spawn ignored");
    }

    fn reload_config(&mut self, config: &MotionConfig) -> bool {
        self.apply_config(config);
        // Re-clamp défensif : l'état courant doit respecter les nouvelles bornes
        self.player.x = self.player.x.clamp(-self.lateral_bound, self.lateral_bound);
        self.player.speed = self.player.speed.clamp(self.min_speed, self.max_speed);
        true
    }

    fn get_config(&self) -> &MotionConfig {
        &self.config
    }
}

impl MotionEngineIterator for TrackMotionEngine {
    fn iter_active_opponents<'a>(&'a self) -> Box<dyn Iterator<Item = &'a OpponentCar> + 'a> {
        Box::new(self.opponents.iter().filter(|c| c.active))
    }
}

impl MotionEngineFull for TrackMotionEngine {}
