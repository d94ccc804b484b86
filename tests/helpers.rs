#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use raceway_sim::audio_engine::sink::ParameterSink;
use raceway_sim::audio_engine::types::{AudioModel, SpatialParams};
use raceway_sim::fixed_math::Fx;
use raceway_sim::input::InputState;
use raceway_sim::motion_engine::config::MotionConfig;
use raceway_sim::motion_engine::types::{OpponentCar, Player};
use raceway_sim::motion_engine::{MotionEngine, MotionEngineFull, MotionEngineIterator};

/// Moteur de déplacement inerte : aucun adversaire, joueur immobile.
pub struct DummyMotion {
    player: Player,
    config: MotionConfig,
}

impl Default for DummyMotion {
    fn default() -> Self {
        Self {
            player: Player::default(),
            config: MotionConfig::default(),
        }
    }
}

impl MotionEngine for DummyMotion {
    fn update(&mut self, _input: &InputState) {}
    fn player(&self) -> &Player {
        &self.player
    }
    fn spawn_opponent(&mut self, _x: Fx, _y: Fx, _z: Fx, _speed: Fx) {}
    fn reload_config(&mut self, _config: &MotionConfig) -> bool {
        false
    }
    fn get_config(&self) -> &MotionConfig {
        &self.config
    }
}

impl MotionEngineIterator for DummyMotion {
    fn iter_active_opponents<'a>(&'a self) -> Box<dyn Iterator<Item = &'a OpponentCar> + 'a> {
        // Crée un itérateur vide, compatible avec la signature
        Box::new(std::iter::empty())
    }
}

impl MotionEngineFull for DummyMotion {}

/// Sink mémoire : enregistre chaque frame consommée par le simulateur.
#[derive(Clone, Default)]
pub struct MemorySink {
    pub frames: Rc<RefCell<Vec<(u64, AudioModel, SpatialParams)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl ParameterSink for MemorySink {
    fn consume(&mut self, tick: u64, model: AudioModel, params: &SpatialParams) {
        self.frames.borrow_mut().push((tick, model, *params));
    }
}

/// Comparaison approchée entre une valeur fixed-point et une référence f64.
pub fn assert_close(actual: Fx, expected: f64, tol: f64) {
    let actual: f64 = actual.to_num();
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
