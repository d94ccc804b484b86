// =========================
// AudioModel
// =========================

use crate::fixed_math::Fx;

/// Psychoacoustic model driving the per-ear levels.
///
/// Deux variantes fermées, exactement une active à la fois, basculée
/// uniquement par la commande externe (jamais inférée).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioModel {
    /// Equal-power panning (loi stéréo standard, cos²+sin²=1)
    #[default]
    Standard,
    /// Interaural level difference : contraste oreille proche/lointaine
    /// avec ombre de la tête
    Ild,
}

impl AudioModel {
    pub fn toggle(self) -> Self {
        match self {
            AudioModel::Standard => AudioModel::Ild,
            AudioModel::Ild => AudioModel::Standard,
        }
    }

    /// Libellé complet pour l'affichage debug
    pub fn label(self) -> &'static str {
        match self {
            AudioModel::Standard => "STANDARD",
            AudioModel::Ild => "ILD",
        }
    }

    /// Libellé compact pour le journal périodique
    pub fn short_label(self) -> &'static str {
        match self {
            AudioModel::Standard => "STD",
            AudioModel::Ild => "ILD",
        }
    }
}

// =========================
// SpatialParams
// =========================

/// Stereo mix parameters computed for the current tick.
///
/// Recalculés entièrement à chaque tick (jamais patchés incrémentalement) ;
/// aucune identité au-delà de "la sortie de la frame courante".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialParams {
    /// Décalage latéral normalisé de la source la plus proche, dans [-1, 1]
    pub pan: Fx,
    /// Atténuation issue de la seule distance, dans [0, 1]
    pub volume: Fx,
    /// Niveau oreille gauche (≥ 0, dépend du modèle actif)
    pub left_level: Fx,
    /// Niveau oreille droite (≥ 0, dépend du modèle actif)
    pub right_level: Fx,
    /// true ssi la source la plus proche est devant (z > 0)
    pub is_front: bool,
    /// |z| de la source la plus proche (sentinelle si aucune source)
    pub distance: Fx,
}

impl Default for SpatialParams {
    fn default() -> Self {
        Self {
            pan: Fx::ZERO,
            volume: Fx::ONE,
            left_level: Fx::ONE,
            right_level: Fx::ONE,
            is_front: true,
            distance: Fx::ZERO,
        }
    }
}

impl SpatialParams {
    /// Sortie de repos quand aucune source n'est active : silence,
    /// pan neutre, distance sentinelle. Jamais un cas d'erreur.
    pub fn quiescent(sentinel_distance: Fx) -> Self {
        Self {
            pan: Fx::ZERO,
            volume: Fx::ZERO,
            left_level: Fx::ZERO,
            right_level: Fx::ZERO,
            is_front: true,
            distance: sentinel_distance,
        }
    }
}
