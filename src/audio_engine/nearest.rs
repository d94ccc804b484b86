use crate::motion_engine::types::OpponentCar;

/// Nearest-source selection: minimum `|z|` among the active sources.
///
/// Scan complet O(n) à chaque tick : n est borné par la capacité des slots,
/// l'exactitude prime sur la micro-optimisation. En cas d'égalité stricte,
/// la première source rencontrée gagne (ordre de scan).
///
/// `None` quand aucune source n'est active : l'appelant produit alors la
/// sortie de repos, jamais une erreur.
pub fn nearest_source<'a>(
    opponents: impl Iterator<Item = &'a OpponentCar>,
) -> Option<&'a OpponentCar> {
    opponents
        .filter(|car| car.active)
        .min_by_key(|car| car.z.abs())
}
