//! Closed-form physics comparisons: spin network area, Orch-OR period, and
//! the heterotic string dimension.
//!
//! None of these draw randomness; their significance is a deviation divided
//! by a fixed denominator.

use std::f64::consts::PI;

use super::Evaluation;
use crate::constants::{
    immirzi, CONSCIOUS_PERIOD, E8_DIMENSION, SIGMA_DENOMINATOR, SPIN_J, STRING_DENOMINATOR,
    TAU_OBSERVED, TRIALITY_PHASE,
};

/// `A_lqg = 8πγ√(j(j+1))` against `A_e8 = |248 cos(2π/3)|`.
#[must_use]
pub fn spin_network() -> Evaluation {
    let gamma = immirzi();
    let lqg_area = 8.0 * PI * gamma * (SPIN_J * (SPIN_J + 1.0)).sqrt();
    let e8_area = (f64::from(E8_DIMENSION) * TRIALITY_PHASE.cos()).abs();
    Evaluation::SpinNetwork {
        immirzi: gamma,
        lqg_area,
        e8_area,
    }
}

/// `τ_brain = N · (1/|cos(2π/3)|) · τ_obs`.
#[must_use]
pub fn orch_or() -> Evaluation {
    let boost = 1.0 / TRIALITY_PHASE.cos().abs();
    Evaluation::OrchOr {
        tau_brain: f64::from(E8_DIMENSION) * boost * TAU_OBSERVED,
    }
}

/// `D = (248 + 248) cos(2π/3)`.
#[must_use]
pub fn string_vacuum() -> Evaluation {
    Evaluation::StringVacuum {
        unified_dim: f64::from(2 * E8_DIMENSION) * TRIALITY_PHASE.cos(),
    }
}

pub(crate) fn area_gap(lqg_area: f64, e8_area: f64) -> f64 {
    (lqg_area.abs() - e8_area.abs()).abs()
}

pub(crate) fn period_gap(tau_brain: f64) -> f64 {
    (tau_brain - CONSCIOUS_PERIOD).abs()
}

pub(crate) fn dimension_gap(unified_dim: f64) -> f64 {
    (unified_dim.abs() - f64::from(E8_DIMENSION)).abs()
}

pub(crate) fn spin_network_sigma(lqg_area: f64, e8_area: f64) -> f64 {
    area_gap(lqg_area, e8_area) / SIGMA_DENOMINATOR
}

pub(crate) fn orch_or_sigma(tau_brain: f64) -> f64 {
    period_gap(tau_brain) / SIGMA_DENOMINATOR
}

pub(crate) fn string_vacuum_sigma(unified_dim: f64) -> f64 {
    dimension_gap(unified_dim) / STRING_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_network_areas() {
        let eval = spin_network();
        let texts: Vec<_> = eval.quantities().into_iter().map(|q| q.text).collect();
        assert_eq!(texts, ["0.275664", "110.7971", "124.0000"]);
        assert!(!eval.verified());
        let sigma = eval.significance();
        assert!(sigma > 1.3e181 && sigma < 1.4e181, "sigma = {sigma:e}");
    }

    #[test]
    fn orch_or_misses_conscious_period() {
        let eval = orch_or();
        assert!(!eval.verified());
        assert_eq!(eval.quantities()[1].text, "1.9840e-10");
        let sigma = eval.significance();
        assert!(sigma > 2.49e178 && sigma < 2.51e178, "sigma = {sigma:e}");
    }

    #[test]
    fn string_vacuum_reduces_to_e8() {
        let eval = string_vacuum();
        assert!(eval.verified());
        assert_eq!(eval.quantities()[1].text, "-248.0000");
        assert!(eval.significance() < 1.0);
    }
}
