use super::Fx;

const FULL_TURN: Fx = Fx::lit("360");
const HALF_TURN: Fx = Fx::lit("180");
const QUARTER_TURN: Fx = Fx::lit("90");
const FOUR: Fx = Fx::lit("4");
// Constante du dénominateur de Bhāskara : 5 * 180² / 4
const BHASKARA_DEN: Fx = Fx::lit("40500");

/// Sine of an angle in degrees, any range (wrapped to a full turn).
///
/// Uses the Bhāskara I rational approximation on each half turn:
///
/// `sin(x°) ≈ 4·x·(180 − x) / (40500 − x·(180 − x))` pour `x ∈ [0, 180]`
///
/// Erreur max ≈ 0.0016, en pur fixed-point (aucun flottant, résultat
/// identique sur toute plateforme). Exact aux points cardinaux
/// (0°, 90°, 180°, 270°).
pub fn sin_deg(angle: Fx) -> Fx {
    let wrapped = angle.rem_euclid(FULL_TURN);
    let (x, negate) = if wrapped >= HALF_TURN {
        (wrapped - HALF_TURN, true)
    } else {
        (wrapped, false)
    };

    // x·(180 − x) culmine à 8100 : aucun risque de débordement en I20F12.
    let p = x * (HALF_TURN - x);
    let s = FOUR * p / (BHASKARA_DEN - p);

    if negate {
        -s
    } else {
        s
    }
}

/// Cosine of an angle in degrees, via the quarter-turn phase shift.
pub fn cos_deg(angle: Fx) -> Fx {
    sin_deg(angle + QUARTER_TURN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Fx, expected: f64, tol: f64) {
        let actual: f64 = actual.to_num();
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sin_deg_cardinal_points_are_exact() {
        assert_eq!(sin_deg(Fx::ZERO), Fx::ZERO);
        assert_eq!(sin_deg(Fx::from_num(90)), Fx::ONE);
        assert_eq!(sin_deg(Fx::from_num(180)), Fx::ZERO);
        assert_eq!(sin_deg(Fx::from_num(270)), -Fx::ONE);
        assert_eq!(cos_deg(Fx::ZERO), Fx::ONE);
        assert_eq!(cos_deg(Fx::from_num(90)), Fx::ZERO);
    }

    #[test]
    fn test_sin_deg_tracks_reference_sine() {
        // Balayage au degré près sur deux tours complets
        for deg in -360..=360 {
            let expected = f64::from(deg).to_radians().sin();
            assert_close(sin_deg(Fx::from_num(deg)), expected, 0.005);
        }
    }

    #[test]
    fn test_cos_deg_tracks_reference_cosine() {
        for deg in -360..=360 {
            let expected = f64::from(deg).to_radians().cos();
            assert_close(cos_deg(Fx::from_num(deg)), expected, 0.005);
        }
    }

    #[test]
    fn test_sin_deg_wraps_full_turns() {
        let a = sin_deg(Fx::from_num(33));
        let b = sin_deg(Fx::from_num(33 + 360));
        let c = sin_deg(Fx::from_num(33 - 720));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_sin_deg_odd_symmetry() {
        for deg in 1..180 {
            let pos = sin_deg(Fx::from_num(deg));
            let neg = sin_deg(Fx::from_num(-deg));
            assert_eq!(pos, -neg);
        }
    }
}
