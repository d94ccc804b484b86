use crate::fixed_math::Fx;
use crate::input::InputState;
use crate::motion_engine::config::MotionConfig;
use crate::motion_engine::types::{OpponentCar, Player};

pub trait MotionEngineIterator {
    /// Retourne un itérateur sur les adversaires actifs.
    ///
    /// `Box<dyn Iterator>` plutôt qu'un type concret : signatures simples et
    /// stables, quel que soit le type interne (`Filter`, `Chain`, etc.).
    /// L'allocation est négligeable devant le coût d'un tick complet.
    fn iter_active_opponents<'a>(&'a self) -> Box<dyn Iterator<Item = &'a OpponentCar> + 'a>;
}

/// 🔧 Trait `MotionEngine`
///
/// Interface commune aux modèles de déplacement : avancer l'état du joueur
/// et des adversaires d'un tick à partir des intentions de contrôle.
/// Fonction totale : toutes les sorties sont rebornées en interne, aucun
/// chemin d'erreur.
pub trait MotionEngine {
    /// Avance joueur et adversaires d'un tick.
    fn update(&mut self, input: &InputState);

    /// État courant du joueur (l'auditeur).
    fn player(&self) -> &Player;

    /// Place un adversaire dans le premier slot inactif.
    /// Ne fait rien si tous les slots sont occupés.
    fn spawn_opponent(&mut self, x: Fx, y: Fx, z: Fx, speed: Fx);

    fn reload_config(&mut self, config: &MotionConfig) -> bool;

    fn get_config(&self) -> &MotionConfig;

    /// Ferme / libère le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.
}

pub trait MotionEngineFull: MotionEngine + MotionEngineIterator {}
