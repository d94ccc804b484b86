use crate::audio_engine::types::{AudioModel, SpatialParams};

/// One debug HUD text line, positioned in screen coordinates.
///
/// Le rendu effectif (sprites, terminal, ...) est hors du cœur : on ne
/// produit ici que les chaînes et leurs positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLine {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Marge gauche commune à toutes les lignes du HUD
const LEFT_MARGIN: i32 = -100;

fn line(y: i32, text: String) -> OverlayLine {
    OverlayLine {
        x: LEFT_MARGIN,
        y,
        text,
    }
}

/// Build the debug display lines for the current tick.
pub fn debug_overlay_lines(model: AudioModel, params: &SpatialParams) -> Vec<OverlayLine> {
    vec![
        line(-70, format!("Mode: {}", model.label())),
        line(
            -55,
            format!(
                "Sample: {}",
                if params.is_front { "FRONT" } else { "BACK" }
            ),
        ),
        line(-40, format!("Pan: {}", params.pan)),
        line(-25, format!("Volume: {}", params.volume)),
        line(-10, format!("L: {}", params.left_level)),
        line(5, format!("R: {}", params.right_level)),
        line(20, format!("Dist: {}", params.distance)),
        // Rappel des commandes
        line(60, "A:Mode B:Debug".to_string()),
    ]
}
