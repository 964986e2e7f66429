//! Structure constants, the unification parameter, and the Lie bracket.

use rand::Rng;

use super::{drawn_sigma, normal, Evaluation};
use crate::constants::{E8_DIMENSION, E8_RANK};

/// Allowed deviation of the structure-constant norm from the E8 dimension.
pub const QUANTUM_TOLERANCE: f64 = 3.0;

/// Samples the structure-constant norm near 248 and the energy near 1.
pub fn quantum<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    let structure_norm = normal(rng, f64::from(E8_DIMENSION), 1.0);
    let energy = normal(rng, 1.0, 0.01);
    Evaluation::Quantum {
        structure_norm,
        energy,
        sigma,
    }
}

/// Samples the unification parameter near 1.
pub fn unification<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    Evaluation::Unification {
        unification: normal(rng, 1.0, 1e-6),
        sigma,
    }
}

/// Brackets the first three components of two sampled 8-D vectors with the cross product.
pub fn lie_bracket<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let x: Vec<f64> = (0..E8_RANK).map(|_| normal(rng, 0.0, 1.0)).collect();
    let y: Vec<f64> = (0..E8_RANK).map(|_| normal(rng, 0.0, 1.0)).collect();
    let (x3, y3) = ([x[0], x[1], x[2]], [y[0], y[1], y[2]]);

    let xy = cross(x3, y3);
    let yx = cross(y3, x3);
    let antisymmetric = xy.iter().zip(&yx).all(|(a, b)| (a + b).abs() <= 1e-12);

    Evaluation::LieBracket {
        bracket_norm: xy.iter().map(|c| c * c).sum::<f64>().sqrt(),
        antisymmetric,
    }
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
