use crate::audio_engine::types::{AudioModel, SpatialParams};
use crate::motion_engine::types::{OpponentCar, Player};

/// 🔧 Trait `SpatialAudioEngine`
///
/// Interface commune aux moteurs de spatialisation : transformer l'état
/// simulé (auditeur + sources) en paramètres de mixage stéréo, une fois
/// par tick. Calcul borné, synchrone, jamais bloquant.
pub trait SpatialAudioEngine {
    /// Calcule les paramètres du tick courant.
    ///
    /// Sans source active, retourne la sortie de repos (distance
    /// sentinelle, pan neutre) : jamais une erreur.
    fn process(
        &mut self,
        player: &Player,
        opponents: Box<dyn Iterator<Item = &OpponentCar> + '_>,
    ) -> SpatialParams;

    /// Bascule le modèle psychoacoustique actif et le retourne.
    /// Commande idempotente par paire, toujours un succès.
    fn toggle_model(&mut self) -> AudioModel;

    fn model(&self) -> AudioModel;

    /// Derniers paramètres calculés (sortie de la frame courante).
    fn last_params(&self) -> &SpatialParams;

    /// Ferme / libère le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.
}
