use log::info;

use crate::audio_engine::nearest::nearest_source;
use crate::audio_engine::settings::AudioEngineSettings;
use crate::audio_engine::spatializer::spatialize;
use crate::audio_engine::types::{AudioModel, SpatialParams};
use crate::audio_engine::SpatialAudioEngine;
use crate::fixed_math::Fx;
use crate::motion_engine::types::{OpponentCar, Player};

// =========================
// PsychoacousticAudio Engine
// =========================

/// Spatialization engine: nearest-source selection + per-ear levels under
/// the active psychoacoustic model.
///
/// Seul état persistant entre deux ticks : le modèle actif et la dernière
/// sortie calculée. Tout le reste est recalculé entièrement à chaque tick.
pub struct PsychoacousticAudio {
    model: AudioModel,
    settings: AudioEngineSettings,
    last_params: SpatialParams,
}

impl PsychoacousticAudio {
    pub fn new(settings: AudioEngineSettings) -> Self {
        Self {
            model: AudioModel::default(),
            settings,
            last_params: SpatialParams::default(),
        }
    }

    pub fn settings(&self) -> &AudioEngineSettings {
        &self.settings
    }
}

impl SpatialAudioEngine for PsychoacousticAudio {
    fn process(
        &mut self,
        player: &Player,
        opponents: Box<dyn Iterator<Item = &OpponentCar> + '_>,
    ) -> SpatialParams {
        let params = match nearest_source(opponents) {
            Some(car) => spatialize(player, car, self.model, &self.settings),
            // Aucune source active : sortie de repos, pas d'erreur
            None => SpatialParams::quiescent(Fx::from_num(self.settings.no_source_distance())),
        };

        self.last_params = params;
        params
    }

    fn toggle_model(&mut self) -> AudioModel {
        self.model = self.model.toggle();
        info!("🔊 Audio mode: {}", self.model.label());
        self.model
    }

    fn model(&self) -> AudioModel {
        self.model
    }

    fn last_params(&self) -> &SpatialParams {
        &self.last_params
    }
}
