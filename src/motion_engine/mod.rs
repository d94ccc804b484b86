pub mod r#trait;
pub use r#trait::{MotionEngine, MotionEngineFull, MotionEngineIterator};

pub mod types;
pub use self::types::{OpponentCar, Player, OPPONENT_SLOTS};

pub mod config;
pub use self::config::MotionConfig;

pub mod track_motion;
pub use self::track_motion::TrackMotionEngine;
