// Ici on importe depuis la crate lib complète
use anyhow::Result;
use itertools::repeat_n;
use log::info;

use raceway_sim::audio_engine::settings::AudioEngineSettings;
use raceway_sim::audio_engine::sink::DiagnosticsLog;
use raceway_sim::audio_engine::PsychoacousticAudio;
use raceway_sim::fixed_math::Fx;
use raceway_sim::input::{InputState, ScriptedInput};
use raceway_sim::motion_engine::config::MotionConfig;
use raceway_sim::motion_engine::track_motion::TrackMotionEngine;
use raceway_sim::motion_engine::MotionEngine;
use raceway_sim::Simulator;

/// Main entry point for the raceway psychoacoustic demo.
fn main() -> Result<()> {
    env_logger::init();

    info!("=================================");
    info!("🏁 Raceway Psychoacoustic Demo");
    info!("=================================");
    info!("A: toggle audio mode (Standard/ILD)");
    info!("B: toggle debug display");
    info!("D-Pad: move player car (séquence scriptée ci-dessous)");

    let motion_config = MotionConfig::from_file("assets/config/motion.toml").unwrap_or_default();
    info!("Motion config loaded:\n{:#?}", motion_config);

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    // Paramètres audio par défaut (constantes canoniques du modèle)
    let audio_settings = AudioEngineSettings::default();
    let audio_engine = PsychoacousticAudio::new(audio_settings);

    let mut motion_engine = TrackMotionEngine::new(&motion_config);
    // Scène de démo : une voiture devant, une derrière à droite
    motion_engine.spawn_opponent(
        Fx::ZERO,
        Fx::from_num(-60),
        Fx::from_num(100),
        Fx::from_num(2),
    );
    motion_engine.spawn_opponent(
        Fx::from_num(40),
        Fx::from_num(-20),
        Fx::from_num(-50),
        Fx::from_num(1.5),
    );

    let mut simulator = Simulator::new(motion_engine, audio_engine, DiagnosticsLog::default());

    // --------------------------
    // Séquence d'entrées scriptée (~10 s à 60 ticks/s)
    // --------------------------
    let idle = InputState::default();
    let accelerate = InputState {
        accelerate_held: true,
        ..Default::default()
    };
    let accelerate_right = InputState {
        accelerate_held: true,
        right_held: true,
        ..Default::default()
    };
    let brake = InputState {
        brake_held: true,
        ..Default::default()
    };
    let toggle_model = InputState {
        toggle_model_pressed: true,
        ..Default::default()
    };

    let script: Vec<InputState> = repeat_n(accelerate, 120)
        .chain(repeat_n(accelerate_right, 60))
        .chain(std::iter::once(toggle_model)) // passage en ILD
        .chain(repeat_n(idle, 180))
        .chain(std::iter::once(toggle_model)) // retour en Standard
        .chain(repeat_n(brake, 120))
        .chain(repeat_n(idle, 120))
        .collect();

    info!("🚀 Starting demo run ({} scripted ticks)...", script.len());
    let mut input = ScriptedInput::new(script);
    simulator.run(&mut input);
    simulator.close();

    Ok(())
}
