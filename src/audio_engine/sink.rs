use log::info;

use crate::audio_engine::types::{AudioModel, SpatialParams};

/// Consumes the computed parameters once per tick.
///
/// C'est la frontière aval du cœur (pilote de lecture audio, journal de
/// diagnostic, overlay de debug). Le cœur ne mixe jamais lui-même.
/// Le compteur de tick est passé explicitement (pas d'état global caché).
pub trait ParameterSink {
    fn consume(&mut self, tick: u64, model: AudioModel, params: &SpatialParams);
}

/// Journal de diagnostic périodique : une ligne toutes les
/// `interval_ticks` frames (mode, devant/derrière, pan, volume).
pub struct DiagnosticsLog {
    interval_ticks: u64,
}

impl DiagnosticsLog {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            // intervalle nul interdit (division par zéro)
            interval_ticks: interval_ticks.max(1),
        }
    }
}

impl Default for DiagnosticsLog {
    /// Une ligne par seconde à 60 ticks/s
    fn default() -> Self {
        Self::new(60)
    }
}

impl ParameterSink for DiagnosticsLog {
    fn consume(&mut self, tick: u64, model: AudioModel, params: &SpatialParams) {
        // Première ligne à la fin du premier intervalle, comme un compteur
        // de frames qui démarre à 1
        if (tick + 1) % self.interval_ticks == 0 {
            info!(
                "Audio - Mode: {} Front: {} Pan: {} Vol: {}",
                model.short_label(),
                params.is_front,
                params.pan,
                params.volume
            );
        }
    }
}

/// Sink muet (tests, embarqué sans journalisation).
pub struct NullSink;

impl ParameterSink for NullSink {
    fn consume(&mut self, _tick: u64, _model: AudioModel, _params: &SpatialParams) {}
}
