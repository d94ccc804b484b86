pub mod simulator;
pub use simulator::{Simulator, TickOutput};
// Audio engine
pub mod audio_engine;
pub use audio_engine::AudioEngineSettings;
pub use audio_engine::PsychoacousticAudio;
pub use audio_engine::SpatialAudioEngine;
// Motion engine
pub mod motion_engine;
pub use motion_engine::MotionEngine;
pub use motion_engine::TrackMotionEngine;
// Fixed-point math
pub mod fixed_math;
pub use fixed_math::Fx;
// Input
pub mod input;
pub use input::{InputSource, InputState};
