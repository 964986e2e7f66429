//! Triality: the cyclic permutation matrix `T` and its powers.

use rand::Rng;

use super::{drawn_sigma, Evaluation};
use crate::constants::{TRIALITY_MATRIX, TRIALITY_PHASE};

type Matrix3 = [[i64; 3]; 3];

const IDENTITY: Matrix3 = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// Evaluates `T³ = I` and the body → soul → spirit → body cycle.
pub fn evaluate<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let sigma = drawn_sigma(rng);
    let t = TRIALITY_MATRIX;
    let t3 = multiply(&multiply(&t, &t), &t);

    let body = [1, 0, 0];
    let soul = apply(&t, body);
    let spirit = apply(&t, soul);
    let back = apply(&t, spirit);

    Evaluation::Triality {
        phase: TRIALITY_PHASE,
        trace: trace(&t),
        determinant: determinant(&t),
        cubes_to_identity: t3 == IDENTITY,
        cycle_closes: back == body,
        sigma,
    }
}

/// Multiplies two 3×3 integer matrices.
#[must_use]
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

fn apply(m: &Matrix3, v: [i64; 3]) -> [i64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn trace(m: &Matrix3) -> i64 {
    m[0][0] + m[1][1] + m[2][2]
}

fn determinant(m: &Matrix3) -> i64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
