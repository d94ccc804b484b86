use log::info;

use crate::audio_engine::overlay::{debug_overlay_lines, OverlayLine};
use crate::audio_engine::sink::ParameterSink;
use crate::audio_engine::types::{AudioModel, SpatialParams};
use crate::audio_engine::SpatialAudioEngine;
use crate::input::{InputSource, InputState};
use crate::motion_engine::MotionEngineFull;

/// Complete output of one simulation tick.
///
/// `overlay` est vide quand l'affichage debug est désactivé.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub tick: u64,
    pub model: AudioModel,
    pub params: SpatialParams,
    pub overlay: Vec<OverlayLine>,
}

/// Frame-stepped driver: input → motion → spatialization → sink.
///
/// Mono-thread, coopératif, déterministe : pour une même séquence
/// d'entrées et un même modèle actif, la séquence de sorties est
/// entièrement reproductible (aucun aléa, aucune horloge murale).
pub struct Simulator<M, A, K>
where
    M: MotionEngineFull,
    A: SpatialAudioEngine,
    K: ParameterSink,
{
    motion_engine: M,
    pub audio_engine: A,
    sink: K,

    debug_display_enabled: bool,
    tick: u64,
}

impl<M, A, K> Simulator<M, A, K>
where
    M: MotionEngineFull,
    A: SpatialAudioEngine,
    K: ParameterSink,
{
    pub fn new(motion_engine: M, audio_engine: A, sink: K) -> Self {
        Self {
            motion_engine,
            audio_engine,
            sink,
            debug_display_enabled: true,
            tick: 0,
        }
    }

    /// Consomme la source d'entrées jusqu'à épuisement, un tick par snapshot.
    pub fn run<I: InputSource>(&mut self, input: &mut I) {
        while let Some(state) = input.poll() {
            self.step(&state);
        }
    }

    /// Avance la simulation d'un tick et retourne la sortie complète.
    pub fn step(&mut self, input: &InputState) -> TickOutput {
        // Commandes discrètes (fronts montants fournis par la couche d'entrée)
        if input.toggle_model_pressed {
            self.audio_engine.toggle_model();
        }
        if input.toggle_debug_pressed {
            self.toggle_debug_display();
        }

        self.motion_engine.update(input);

        let params = self.audio_engine.process(
            self.motion_engine.player(),
            self.motion_engine.iter_active_opponents(),
        );

        let model = self.audio_engine.model();
        self.sink.consume(self.tick, model, &params);

        let overlay = if self.debug_display_enabled {
            debug_overlay_lines(model, &params)
        } else {
            Vec::new()
        };

        let output = TickOutput {
            tick: self.tick,
            model,
            params,
            overlay,
        };
        self.tick += 1;
        output
    }

    /// Commande externe : bascule le modèle psychoacoustique.
    pub fn toggle_audio_model(&mut self) -> AudioModel {
        self.audio_engine.toggle_model()
    }

    /// Commande externe : bascule l'affichage debug.
    pub fn toggle_debug_display(&mut self) -> bool {
        self.debug_display_enabled = !self.debug_display_enabled;
        self.debug_display_enabled
    }

    pub fn close(&mut self) {
        self.motion_engine.close();
        self.audio_engine.close();
        info!("🏁 Simulator closed after {} ticks", self.tick);
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn debug_display_enabled(&self) -> bool {
        self.debug_display_enabled
    }

    pub fn motion_engine(&self) -> &M {
        &self.motion_engine
    }

    pub fn motion_engine_mut(&mut self) -> &mut M {
        &mut self.motion_engine
    }

    pub fn audio_engine(&self) -> &A {
        &self.audio_engine
    }
}
