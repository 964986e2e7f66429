//! Application categories: configuration-space paths, the Golay code, and Moonshine.

use rand::Rng;

use super::{normal, Evaluation};
use crate::constants::{
    E8_DIMENSION, E8_RANK, GOLAY, J_INVARIANT_COEFF, MONSTER_MIN_REP, PATH_WAYPOINTS,
};

/// Sums the segment lengths of sampled waypoints and normalises by `√248`.
pub fn path_action<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let waypoints: Vec<Vec<f64>> = (0..PATH_WAYPOINTS)
        .map(|_| (0..E8_RANK).map(|_| normal(rng, 0.0, 1.0)).collect())
        .collect();

    let path_length: f64 = waypoints
        .windows(2)
        .map(|pair| {
            pair[0]
                .iter()
                .zip(&pair[1])
                .map(|(a, b)| (b - a) * (b - a))
                .sum::<f64>()
                .sqrt()
        })
        .sum();

    Evaluation::PathAction {
        path_length,
        action: path_length / f64::from(E8_DIMENSION).sqrt(),
    }
}

/// Samples a uniform message of `k` bits and embeds the code in `3 · E8`.
pub fn golay_code<R: Rng + ?Sized>(rng: &mut R) -> Evaluation {
    let (_, k, _) = GOLAY;
    let message_weight = (0..k).map(|_| rng.gen_range(0..2_u32)).sum();
    Evaluation::GolayCode {
        message_weight,
        leech_dimension: 3 * E8_RANK as u32,
    }
}

/// The Moonshine constants; nothing is sampled.
#[must_use]
pub fn moonshine() -> Evaluation {
    Evaluation::Moonshine
}

/// `196884 = 196883 + 1`.
pub(crate) fn moonshine_consistent() -> bool {
    J_INVARIANT_COEFF == MONSTER_MIN_REP + 1
}
