use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MotionConfig {
    /// Pas latéral du joueur par tick (par direction maintenue)
    pub lateral_step: f32,
    /// Borne latérale de la piste (|x| max du joueur)
    pub lateral_bound: f32,

    /// Incrément de vitesse par tick (accélération/freinage maintenu)
    pub speed_step: f32,
    /// Vitesse minimale (marche arrière lente, borne volontairement asymétrique)
    pub min_speed: f32,
    /// Vitesse maximale
    pub max_speed: f32,

    /// Demi-longueur de piste : z est rebouclé dans [-track_half_length, +track_half_length]
    pub track_half_length: f32,
    /// Fréquence de l'oscillation latérale des adversaires (degrés par unité de z)
    pub weave_frequency: f32,
    /// Amplitude de l'oscillation latérale
    pub weave_amplitude: f32,

    pub player_start_x: f32,
    pub player_start_y: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            lateral_step: 2.0,
            lateral_bound: 100.0,
            speed_step: 0.1,
            min_speed: -1.0,
            max_speed: 3.0,
            track_half_length: 200.0,
            weave_frequency: 16.0,
            weave_amplitude: 0.5,
            player_start_x: 0.0,
            player_start_y: 40.0,
        }
    }
}

impl MotionConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
