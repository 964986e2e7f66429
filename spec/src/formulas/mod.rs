//! Category formulas.
//!
//! Each category evaluates one fixed closed-form formula, optionally perturbed
//! by draws from the record's random stream. The result is an [`Evaluation`]:
//! one variant per category carrying exactly the values its formula produces.
//! Rounding into [`Quantity`] values happens once, in [`Evaluation::quantities`].

pub mod applications;
pub mod field;
pub mod lattice;
pub mod physics;
pub mod triality;

use rand::Rng;

use crate::constants::{
    COXETER_NUMBER, E8_DIMENSION, E8_POSITIVE_ROOTS, E8_ROOTS, GOLAY, J_INVARIANT_COEFF,
    MOONSHINE_T_G, NOMINAL_SIGMA, PATH_WAYPOINTS, SIGMA_MEAN, SIGMA_SPREAD, TAU_OBSERVED,
};
use crate::model::{Category, Precision, Quantity};

/// The raw outcome of evaluating one category formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Powers of the cyclic triality matrix.
    Triality {
        /// Triality phase in radians.
        phase: f64,
        /// Trace of `T`.
        trace: i64,
        /// Determinant of `T`.
        determinant: i64,
        /// Whether `T³ = I`.
        cubes_to_identity: bool,
        /// Whether body → soul → spirit returns to body.
        cycle_closes: bool,
        /// Drawn significance.
        sigma: f64,
    },
    /// LQG area eigenvalue against the triality-corrected E8 area.
    SpinNetwork {
        /// Immirzi parameter.
        immirzi: f64,
        /// `8πγ√(j(j+1))`.
        lqg_area: f64,
        /// `|248 cos(2π/3)|`.
        e8_area: f64,
    },
    /// Brain-scale coherence time.
    OrchOr {
        /// `248 · (1/|cos(2π/3)|) · τ_obs`.
        tau_brain: f64,
    },
    /// Heterotic dimension projected through triality.
    StringVacuum {
        /// `496 cos(2π/3)`.
        unified_dim: f64,
    },
    /// Sampled root vector rescaled to length √2.
    RootLattice {
        /// Squared norm of the rescaled vector.
        root_norm: f64,
        /// Drawn significance.
        sigma: f64,
    },
    /// Weyl group order from two independent products.
    WeylGroup {
        /// `2¹⁴ · 3⁵ · 5² · 7`.
        weyl_order: u64,
        /// Product of the invariant degrees.
        degree_product: u64,
        /// Drawn significance.
        sigma: f64,
    },
    /// Cartan matrix determinant and a sampled eigenvalue.
    Cartan {
        /// `2 + N(0, 0.1)`.
        eigenvalue: f64,
        /// Determinant of the Cartan matrix.
        determinant: f64,
        /// Whether every diagonal entry is 2.
        diagonal_is_two: bool,
        /// Drawn significance.
        sigma: f64,
    },
    /// Killing form normalisation.
    Symmetry {
        /// `60 + N(0, 0.1)`.
        killing_form: f64,
        /// Drawn significance.
        sigma: f64,
    },
    /// Structure-constant norm and energy.
    Quantum {
        /// `248 + N(0, 1)`.
        structure_norm: f64,
        /// `1 + N(0, 0.01)`.
        energy: f64,
        /// Drawn significance.
        sigma: f64,
    },
    /// Unification parameter.
    Unification {
        /// `1 + N(0, 1e-6)`.
        unification: f64,
        /// Drawn significance.
        sigma: f64,
    },
    /// Path through sampled waypoints.
    PathAction {
        /// Sum of the segment lengths.
        path_length: f64,
        /// `path_length / √248`.
        action: f64,
    },
    /// Golay code parameters and a sampled message.
    GolayCode {
        /// Number of ones in the sampled 12-bit message.
        message_weight: u32,
        /// `3 · rank`.
        leech_dimension: u32,
    },
    /// Moonshine constants.
    Moonshine,
    /// Cross-product bracket of two sampled vectors.
    LieBracket {
        /// Euclidean norm of `[X, Y]`.
        bracket_norm: f64,
        /// Whether `[X, Y] = −[Y, X]`.
        antisymmetric: bool,
    },
}

/// Evaluates the formula of `category`, drawing from `rng` as the formula requires.
pub fn evaluate<R: Rng + ?Sized>(category: Category, rng: &mut R) -> Evaluation {
    match category {
        Category::Triality => triality::evaluate(rng),
        Category::SpinNetwork => physics::spin_network(),
        Category::OrchOr => physics::orch_or(),
        Category::StringVacuum => physics::string_vacuum(),
        Category::RootLattice => lattice::root_lattice(rng),
        Category::WeylGroup => lattice::weyl_group(rng),
        Category::Cartan => lattice::cartan(rng),
        Category::Symmetry => lattice::symmetry(rng),
        Category::Quantum => field::quantum(rng),
        Category::Unification => field::unification(rng),
        Category::PathAction => applications::path_action(rng),
        Category::GolayCode => applications::golay_code(rng),
        Category::Moonshine => applications::moonshine(),
        Category::LieBracket => field::lie_bracket(rng),
    }
}

impl Evaluation {
    /// Returns the category this evaluation belongs to.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Evaluation::Triality { .. } => Category::Triality,
            Evaluation::SpinNetwork { .. } => Category::SpinNetwork,
            Evaluation::OrchOr { .. } => Category::OrchOr,
            Evaluation::StringVacuum { .. } => Category::StringVacuum,
            Evaluation::RootLattice { .. } => Category::RootLattice,
            Evaluation::WeylGroup { .. } => Category::WeylGroup,
            Evaluation::Cartan { .. } => Category::Cartan,
            Evaluation::Symmetry { .. } => Category::Symmetry,
            Evaluation::Quantum { .. } => Category::Quantum,
            Evaluation::Unification { .. } => Category::Unification,
            Evaluation::PathAction { .. } => Category::PathAction,
            Evaluation::GolayCode { .. } => Category::GolayCode,
            Evaluation::Moonshine => Category::Moonshine,
            Evaluation::LieBracket { .. } => Category::LieBracket,
        }
    }

    /// Returns the rounded numeric fields of this evaluation, in template order.
    #[must_use]
    pub fn quantities(&self) -> Vec<Quantity> {
        use Precision::{Fixed, Integer, Scientific};

        match *self {
            Evaluation::Triality {
                phase,
                trace,
                determinant,
                ..
            } => vec![
                Quantity::new("phase", phase, Fixed(6)),
                Quantity::new("cos_phase", phase.cos(), Fixed(6)),
                Quantity::new("trace", trace as f64, Integer),
                Quantity::new("determinant", determinant as f64, Integer),
            ],
            Evaluation::SpinNetwork {
                immirzi,
                lqg_area,
                e8_area,
            } => vec![
                Quantity::new("immirzi", immirzi, Fixed(6)),
                Quantity::new("lqg_area", lqg_area, Fixed(4)),
                Quantity::new("e8_area", e8_area, Fixed(4)),
            ],
            Evaluation::OrchOr { tau_brain } => vec![
                Quantity::new("tau_obs", TAU_OBSERVED, Scientific(1)),
                Quantity::new("tau_brain", tau_brain, Scientific(4)),
            ],
            Evaluation::StringVacuum { unified_dim } => vec![
                Quantity::new("pair_dimension", f64::from(2 * E8_DIMENSION), Integer),
                Quantity::new("unified_dim", unified_dim, Fixed(4)),
            ],
            Evaluation::RootLattice { root_norm, .. } => vec![
                Quantity::new("root_norm", root_norm, Fixed(4)),
                Quantity::new("total_roots", f64::from(E8_ROOTS), Integer),
            ],
            Evaluation::WeylGroup { weyl_order, .. } => vec![
                Quantity::new("weyl_order", weyl_order as f64, Integer),
                Quantity::new("coxeter_number", f64::from(COXETER_NUMBER), Integer),
            ],
            Evaluation::Cartan {
                eigenvalue,
                determinant,
                ..
            } => vec![
                Quantity::new("eigenvalue", eigenvalue, Fixed(6)),
                Quantity::new("determinant", determinant, Fixed(6)),
            ],
            Evaluation::Symmetry { killing_form, .. } => vec![
                Quantity::new("killing_form", killing_form, Fixed(6)),
                Quantity::new("positive_roots", f64::from(E8_POSITIVE_ROOTS), Integer),
            ],
            Evaluation::Quantum {
                structure_norm,
                energy,
                ..
            } => vec![
                Quantity::new("structure_norm", structure_norm, Fixed(4)),
                Quantity::new("energy", energy, Fixed(6)),
            ],
            Evaluation::Unification { unification, .. } => {
                vec![Quantity::new("unification", unification, Fixed(6))]
            }
            Evaluation::PathAction {
                path_length,
                action,
            } => vec![
                Quantity::new("path_length", path_length, Fixed(4)),
                Quantity::new("action", action, Fixed(6)),
                Quantity::new("waypoints", PATH_WAYPOINTS as f64, Integer),
            ],
            Evaluation::GolayCode {
                message_weight,
                leech_dimension,
            } => {
                let (n, k, d) = GOLAY;
                vec![
                    Quantity::new("code_rate", f64::from(k) / f64::from(n), Fixed(4)),
                    Quantity::new("min_distance", f64::from(d), Integer),
                    Quantity::new("leech_dimension", f64::from(leech_dimension), Integer),
                    Quantity::new("message_weight", f64::from(message_weight), Integer),
                ]
            }
            Evaluation::Moonshine => vec![
                Quantity::new("thompson_t_g", f64::from(MOONSHINE_T_G), Integer),
                Quantity::new("j_invariant_coeff", J_INVARIANT_COEFF as f64, Integer),
                Quantity::new("modular_weight", f64::from(GOLAY.1), Integer),
            ],
            Evaluation::LieBracket { bracket_norm, .. } => {
                vec![Quantity::new("bracket_norm", bracket_norm, Fixed(6))]
            }
        }
    }

    /// Returns the outcome of the category's tolerance check.
    #[must_use]
    pub fn verified(&self) -> bool {
        match *self {
            Evaluation::Triality {
                cubes_to_identity,
                cycle_closes,
                ..
            } => cubes_to_identity && cycle_closes,
            Evaluation::SpinNetwork {
                lqg_area, e8_area, ..
            } => physics::area_gap(lqg_area, e8_area) < 1e-6,
            Evaluation::OrchOr { tau_brain } => physics::period_gap(tau_brain) < 0.001,
            Evaluation::StringVacuum { unified_dim } => physics::dimension_gap(unified_dim) < 1.0,
            Evaluation::RootLattice { root_norm, .. } => (root_norm - 2.0).abs() <= 0.1,
            Evaluation::WeylGroup {
                weyl_order,
                degree_product,
                ..
            } => lattice::weyl_consistent(weyl_order, degree_product),
            Evaluation::Cartan {
                determinant,
                diagonal_is_two,
                ..
            } => diagonal_is_two && (determinant - 1.0).abs() < 1e-9,
            Evaluation::Symmetry { .. } => lattice::dimension_from_roots() == E8_DIMENSION,
            Evaluation::Quantum { structure_norm, .. } => {
                (structure_norm - f64::from(E8_DIMENSION)).abs() < field::QUANTUM_TOLERANCE
            }
            Evaluation::Unification { unification, .. } => (unification - 1.0).abs() < 1e-5,
            Evaluation::PathAction { .. } => true,
            Evaluation::GolayCode {
                leech_dimension, ..
            } => leech_dimension == GOLAY.0,
            Evaluation::Moonshine => applications::moonshine_consistent(),
            Evaluation::LieBracket { antisymmetric, .. } => antisymmetric,
        }
    }

    /// Returns the raw significance value.
    ///
    /// Three categories divide a deviation by a fixed tiny denominator and
    /// produce astronomically large values; those are kept as computed.
    #[must_use]
    pub fn significance(&self) -> f64 {
        match *self {
            Evaluation::Triality { sigma, .. }
            | Evaluation::RootLattice { sigma, .. }
            | Evaluation::WeylGroup { sigma, .. }
            | Evaluation::Cartan { sigma, .. }
            | Evaluation::Symmetry { sigma, .. }
            | Evaluation::Quantum { sigma, .. }
            | Evaluation::Unification { sigma, .. } => sigma,
            Evaluation::SpinNetwork {
                lqg_area, e8_area, ..
            } => physics::spin_network_sigma(lqg_area, e8_area),
            Evaluation::OrchOr { tau_brain } => physics::orch_or_sigma(tau_brain),
            Evaluation::StringVacuum { unified_dim } => physics::string_vacuum_sigma(unified_dim),
            Evaluation::PathAction { .. }
            | Evaluation::GolayCode { .. }
            | Evaluation::Moonshine
            | Evaluation::LieBracket { .. } => NOMINAL_SIGMA,
        }
    }

    /// Returns the significance rounded for rendering.
    #[must_use]
    pub fn significance_quantity(&self) -> Quantity {
        Quantity::new("sigma", self.significance(), Precision::Scientific(2))
    }
}

/// Draws `N(mean, sd)` with the Box-Muller transform.
pub(crate) fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    // `1 - u` maps [0, 1) onto (0, 1] so the logarithm stays finite.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + sd * z
}

/// Draws the nominal significance `|N(1e192, 1e191)|`.
pub(crate) fn drawn_sigma<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    normal(rng, SIGMA_MEAN, SIGMA_SPREAD).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn every_category_evaluates_to_itself() {
        let mut rng = seeded_rng();
        for category in Category::ALL {
            assert_eq!(evaluate(category, &mut rng).category(), category);
        }
    }

    #[test]
    fn every_category_has_quantities() {
        let mut rng = seeded_rng();
        for category in Category::ALL {
            let eval = evaluate(category, &mut rng);
            assert!(!eval.quantities().is_empty(), "{category} has no quantities");
        }
    }

    #[test]
    fn quantity_names_unique_per_category() {
        let mut rng = seeded_rng();
        for category in Category::ALL {
            let quantities = evaluate(category, &mut rng).quantities();
            let mut names: Vec<_> = quantities.iter().map(|q| q.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), quantities.len(), "{category} repeats a name");
        }
    }

    #[test]
    fn drawn_sigma_is_positive_and_huge() {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            let sigma = drawn_sigma(&mut rng);
            assert!(sigma > 1e190);
        }
    }

    #[test]
    fn fixed_categories_are_rng_independent() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(2);
        for category in [
            Category::SpinNetwork,
            Category::OrchOr,
            Category::StringVacuum,
            Category::Moonshine,
        ] {
            assert_eq!(evaluate(category, &mut a), evaluate(category, &mut b));
        }
    }
}
