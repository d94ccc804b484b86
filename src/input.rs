// =========================
// Control input snapshot
// =========================

/// Per-tick snapshot of the discrete control intents.
///
/// Les champs `*_held` sont des signaux de niveau (maintenus tant que la
/// touche est enfoncée), les champs `*_pressed` des fronts montants détectés
/// par la couche d'entrée (un seul tick à `true` par pression).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
    pub accelerate_held: bool,
    pub brake_held: bool,
    pub toggle_model_pressed: bool,
    pub toggle_debug_pressed: bool,
}

/// Source d'entrées interrogée une fois par tick par le `Simulator`.
///
/// `None` signale la fin des entrées : la boucle de simulation s'arrête
/// (équivalent du "should_close" d'une couche fenêtre).
pub trait InputSource {
    fn poll(&mut self) -> Option<InputState>;
}

/// Finite, pre-recorded input sequence (demo binary and tests).
pub struct ScriptedInput {
    frames: Vec<InputState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputState>) -> Self {
        Self { frames, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputState> {
        let state = self.frames.get(self.cursor).copied();
        if state.is_some() {
            self.cursor += 1;
        }
        state
    }
}
