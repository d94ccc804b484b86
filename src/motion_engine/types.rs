use crate::fixed_math::Fx;

/// Nombre de slots d'adversaires. Capacité fixe : aucun slot n'est jamais
/// alloué ni libéré en cours de simulation, seul le flag `active` change.
pub const OPPONENT_SLOTS: usize = 4;

/// Listener state: the player's vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    pub x: Fx,
    pub y: Fx,
    /// Vitesse d'avancement le long de la piste (négative = marche arrière)
    pub speed: Fx,
}

/// Sound source state: an opponent vehicle on the track.
///
/// `z` est la profondeur signée relative au joueur le long de la piste
/// (positif = devant, négatif = derrière), toujours rebouclée dans
/// `[-track_half_length, +track_half_length]` après chaque tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentCar {
    pub x: Fx,
    pub y: Fx,
    pub z: Fx,
    pub speed: Fx,
    pub active: bool,
}

impl Default for OpponentCar {
    fn default() -> Self {
        Self {
            x: Fx::ZERO,
            y: Fx::ZERO,
            z: Fx::ZERO,
            speed: Fx::ONE,
            active: false,
        }
    }
}
