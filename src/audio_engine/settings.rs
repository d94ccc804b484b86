// =========================
// Audio Engine Configuration
// =========================

use derive_builder::Builder;

/// Parameters controlling spatialization and attenuation.
///
/// All fields are private, configuration is done exclusively via the builder:
///
#[derive(Clone, Builder, Debug)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct AudioEngineSettings {
    /// Largeur de référence pour la projection latérale → pan
    /// (un écart de x de ±100 unités correspond à un pan de ±1)
    #[builder(default = "100.0")]
    pub pan_reference_width: f32,

    /// Distance à laquelle le volume atteint exactement 0 (falloff linéaire)
    #[builder(default = "200.0")]
    pub silence_distance: f32,

    /// Demi-angle du balayage equal-power (pan ∈ [-1,1] → angle ∈ [0°, 90°])
    #[builder(default = "45.0")]
    pub pan_sweep_half_angle: f32,

    /// Coefficient d'ombre maximale de la tête (oreille lointaine, mode ILD)
    #[builder(default = "0.6")]
    pub shadow_coefficient: f32,

    /// Atténuation uniforme supplémentaire pour une source derrière (mode ILD)
    #[builder(default = "0.7")]
    pub rear_attenuation: f32,

    /// Distance sentinelle rapportée quand aucune source n'est active
    #[builder(default = "1000.0")]
    pub no_source_distance: f32,
}

impl AudioEngineSettings {
    /// Accessors: read-only public getters
    pub fn pan_reference_width(&self) -> f32 {
        self.pan_reference_width
    }

    pub fn silence_distance(&self) -> f32 {
        self.silence_distance
    }

    pub fn pan_sweep_half_angle(&self) -> f32 {
        self.pan_sweep_half_angle
    }

    pub fn shadow_coefficient(&self) -> f32 {
        self.shadow_coefficient
    }

    pub fn rear_attenuation(&self) -> f32 {
        self.rear_attenuation
    }

    pub fn no_source_distance(&self) -> f32 {
        self.no_source_distance
    }
}

/// Keep backward compatibility with `.default()`
impl Default for AudioEngineSettings {
    fn default() -> Self {
        AudioEngineSettingsBuilder::default().build().unwrap()
    }
}
