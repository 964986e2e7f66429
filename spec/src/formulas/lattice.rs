//! Root lattice, Weyl group, Cartan matrix, and dimension counting.

use rand::Rng;

use super::{drawn_sigma, normal, Evaluation};
use crate::constants::{
    CARTAN_MATRIX, COXETER_NUMBER, E8_POSITIVE_ROOTS, E8_RANK, E8_ROOTS, INVARIANT_DEGREES,
    KILLING_NORMALISATION, WEYL_ORDER,
};

/// Samples an 8-D normal vector, rescales it to length √2, and reports its squared norm.
pub fn root_lattice<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    let raw: Vec<f64> = (0..E8_RANK).map(|_| normal(rng, 0.0, 1.0)).collect();
    let length = raw.iter().map(|x| x * x).sum::<f64>().sqrt();
    let root_norm = if length > 0.0 {
        let scale = 2.0_f64.sqrt() / length;
        raw.iter().map(|x| (x * scale) * (x * scale)).sum()
    } else {
        0.0
    };
    Evaluation::RootLattice { root_norm, sigma }
}

/// Computes `|W(E8)|` from its prime factorisation and from the invariant degrees.
pub fn weyl_group<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    Evaluation::WeylGroup {
        weyl_order: 2_u64.pow(14) * 3_u64.pow(5) * 5_u64.pow(2) * 7,
        degree_product: INVARIANT_DEGREES.iter().product(),
        sigma,
    }
}

/// Evaluates the Cartan matrix determinant and samples an eigenvalue near 2.
pub fn cartan<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    let eigenvalue = normal(rng, 2.0, 0.1);
    Evaluation::Cartan {
        eigenvalue,
        determinant: cartan_determinant(),
        diagonal_is_two: (0..E8_RANK).all(|i| CARTAN_MATRIX[i][i] == 2),
        sigma,
    }
}

/// Samples the Killing form normalisation near `2h = 60`.
pub fn symmetry<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    Evaluation::Symmetry {
        killing_form: normal(rng, KILLING_NORMALISATION, 0.1),
        sigma,
    }
}

/// Determinant of [`CARTAN_MATRIX`] by Gaussian elimination with partial pivoting.
#[must_use]
pub fn cartan_determinant() -> f64 {
    let mut m = CARTAN_MATRIX.map(|row| row.map(f64::from));
    let n = m.len();
    let mut det = 1.0;

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .unwrap_or(col);
        if m[pivot][col] == 0.0 {
            return 0.0;
        }
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }
        det *= m[col][col];
        for row in col + 1..n {
            let factor = m[row][col] / m[col][col];
            for k in col..n {
                m[row][k] -= factor * m[col][k];
            }
        }
    }
    det
}

/// `rank + 2 · positive roots`.
pub(crate) fn dimension_from_roots() -> u32 {
    E8_RANK as u32 + 2 * E8_POSITIVE_ROOTS
}

pub(crate) fn weyl_consistent(weyl_order: u64, degree_product: u64) -> bool {
    weyl_order == WEYL_ORDER
        && degree_product == WEYL_ORDER
        && E8_RANK as u32 * COXETER_NUMBER == E8_ROOTS
}
