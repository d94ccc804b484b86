pub mod r#trait;
pub use r#trait::SpatialAudioEngine;

pub mod psychoacoustic_audio;
pub use psychoacoustic_audio::PsychoacousticAudio;

pub mod types;
pub use self::types::{AudioModel, SpatialParams};

pub mod nearest;
pub use nearest::nearest_source;

pub mod spatializer;
pub use spatializer::spatialize;

pub mod settings;
pub use settings::AudioEngineSettings;

pub mod sink;
pub use sink::{DiagnosticsLog, NullSink, ParameterSink};

pub mod overlay;
pub use overlay::{debug_overlay_lines, OverlayLine};
