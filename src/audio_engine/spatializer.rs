use crate::audio_engine::settings::AudioEngineSettings;
use crate::audio_engine::types::{AudioModel, SpatialParams};
use crate::fixed_math::{cos_deg, sin_deg, Fx};
use crate::motion_engine::types::{OpponentCar, Player};

/// Compute the full stereo parameter set for one listener/source pair.
///
/// Fonction pure, totale : aucune E/S, aucun état, toutes les sorties
/// dérivées sont rebornées à chaque étape. C'est le seul endroit du dépôt
/// avec du vrai contenu algorithmique : directement testable sans moteur.
pub fn spatialize(
    player: &Player,
    source: &OpponentCar,
    model: AudioModel,
    settings: &AudioEngineSettings,
) -> SpatialParams {
    // ---------------------------------------------------------------
    // 1. Projection commune (indépendante du modèle)
    // ---------------------------------------------------------------
    let distance = source.z.abs();
    let is_front = source.z > Fx::ZERO;

    // Projection latérale linéaire normalisée : une approximation assumée,
    // pas une vraie projection angulaire.
    let pan_width = Fx::from_num(settings.pan_reference_width());
    let pan = ((source.x - player.x) / pan_width).clamp(-Fx::ONE, Fx::ONE);

    // Falloff linéaire jusqu'au silence
    let silence_distance = Fx::from_num(settings.silence_distance());
    let volume = (Fx::ONE - distance / silence_distance).clamp(Fx::ZERO, Fx::ONE);

    // ---------------------------------------------------------------
    // 2. Niveaux par oreille selon le modèle actif
    // ---------------------------------------------------------------
    let (left_level, right_level) = match model {
        AudioModel::Standard => standard_levels(pan, volume, settings),
        AudioModel::Ild => ild_levels(pan, volume, is_front, settings),
    };

    SpatialParams {
        pan,
        volume,
        left_level,
        right_level,
        is_front,
        distance,
    }
}

/// Equal-power panning : pan ∈ [-1,1] → angle ∈ [0°, 90°], gains en
/// cos/sin. cos²+sin²=1, la puissance perçue reste constante sur tout le
/// champ stéréo.
fn standard_levels(pan: Fx, volume: Fx, settings: &AudioEngineSettings) -> (Fx, Fx) {
    let half_sweep = Fx::from_num(settings.pan_sweep_half_angle());
    let angle = (pan + Fx::ONE) * half_sweep;

    let left_level = cos_deg(angle) * volume;
    let right_level = sin_deg(angle) * volume;
    (left_level, right_level)
}

/// ILD : l'oreille côté source reste à plein volume, l'oreille opposée est
/// atténuée par l'ombre de la tête (facteur borné à [0,1] avant
/// multiplication). Une source derrière subit une atténuation uniforme
/// supplémentaire sur les deux oreilles.
fn ild_levels(pan: Fx, volume: Fx, is_front: bool, settings: &AudioEngineSettings) -> (Fx, Fx) {
    let shadow_coefficient = Fx::from_num(settings.shadow_coefficient());

    let (mut left_level, mut right_level) = if pan < Fx::ZERO {
        // Source à gauche → oreille droite dans l'ombre
        let shadow = (Fx::ONE + pan).clamp(Fx::ZERO, Fx::ONE);
        (volume, volume * shadow * shadow_coefficient)
    } else {
        // Source à droite (ou centrée) → oreille gauche dans l'ombre
        let shadow = (Fx::ONE - pan).clamp(Fx::ZERO, Fx::ONE);
        (volume * shadow * shadow_coefficient, volume)
    };

    if !is_front {
        let rear_attenuation = Fx::from_num(settings.rear_attenuation());
        left_level *= rear_attenuation;
        right_level *= rear_attenuation;
    }

    (left_level, right_level)
}
