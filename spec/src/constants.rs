//! Fixed E8 constants shared by every formula.

use std::f64::consts::PI;

/// Dimension of the E8 Lie algebra.
pub const E8_DIMENSION: u32 = 248;

/// Number of roots in the E8 root system.
pub const E8_ROOTS: u32 = 240;

/// Rank of E8.
pub const E8_RANK: usize = 8;

/// Number of positive roots.
pub const E8_POSITIVE_ROOTS: u32 = 120;

/// Coxeter number `h`.
pub const COXETER_NUMBER: u32 = 30;

/// Order of the Weyl group `|W(E8)|`.
pub const WEYL_ORDER: u64 = 696_729_600;

/// Degrees of the basic invariants of `W(E8)`; their product is [`WEYL_ORDER`].
pub const INVARIANT_DEGREES: [u64; 8] = [2, 8, 12, 14, 18, 20, 24, 30];

/// Triality phase `2π/3`.
pub const TRIALITY_PHASE: f64 = 2.0 * PI / 3.0;

/// Spin quantum number attached to an E8 root in the spin network formula.
pub const SPIN_J: f64 = 31.0 / 2.0;

/// Observed microtubule coherence time in seconds (400 fs).
pub const TAU_OBSERVED: f64 = 4e-13;

/// Conscious moment in seconds (25 ms).
pub const CONSCIOUS_PERIOD: f64 = 0.025;

/// Denominator of the spin network and Orch-OR significance ratios.
pub const SIGMA_DENOMINATOR: f64 = 1e-180;

/// Denominator of the string vacuum significance ratio.
pub const STRING_DENOMINATOR: f64 = 1e-9;

/// Mean of the drawn significance distribution.
pub const SIGMA_MEAN: f64 = 1e192;

/// Standard deviation of the drawn significance distribution.
pub const SIGMA_SPREAD: f64 = 1e191;

/// Fixed significance reported by the application categories.
pub const NOMINAL_SIGMA: f64 = 16.48;

/// Golay code length, dimension, and minimum distance.
pub const GOLAY: (u32, u32, u32) = (24, 12, 8);

/// McKay–Thompson `T_g` count.
pub const MOONSHINE_T_G: u32 = 194;

/// Coefficient of `q` in the `j`-invariant expansion.
pub const J_INVARIANT_COEFF: u64 = 196_884;

/// Dimension of the smallest non-trivial Monster representation.
pub const MONSTER_MIN_REP: u64 = 196_883;

/// Number of waypoints sampled by the path-action formula.
pub const PATH_WAYPOINTS: usize = 8;

/// Killing form normalisation `2h`.
pub const KILLING_NORMALISATION: f64 = 60.0;

/// The Immirzi parameter `γ = √3 / 2π`.
#[must_use]
pub fn immirzi() -> f64 {
    3.0_f64.sqrt() / (2.0 * PI)
}

/// The E8 Cartan matrix in Bourbaki labelling (node 2 attached to node 4).
pub const CARTAN_MATRIX: [[i32; 8]; 8] = [
    [2, 0, -1, 0, 0, 0, 0, 0],
    [0, 2, 0, -1, 0, 0, 0, 0],
    [-1, 0, 2, -1, 0, 0, 0, 0],
    [0, -1, -1, 2, -1, 0, 0, 0],
    [0, 0, 0, -1, 2, -1, 0, 0],
    [0, 0, 0, 0, -1, 2, -1, 0],
    [0, 0, 0, 0, 0, -1, 2, -1],
    [0, 0, 0, 0, 0, 0, -1, 2],
];

/// The 3×3 cyclic triality matrix.
pub const TRIALITY_MATRIX: [[i64; 3]; 3] = [[0, 0, 1], [1, 0, 0], [0, 1, 0]];
