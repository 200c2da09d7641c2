use std::f64::consts::TAU;
use tracing::warn;

use crate::constants::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};

/// Solve `E - e·sin(E) = M` for the eccentric anomaly `E`.
///
/// `M` is normalized into `[0, 2π)` first and the iteration starts from
/// `E0 = M + e·sin(M)`. Each step is Newton's with Halley's curvature term,
/// kept inside a sign bracket on `[0, 2π]`; a step that leaves the bracket is
/// replaced by bisection. Requires `0 ≤ e < 1`.
///
/// If the iteration cap is reached before the correction drops below tolerance
/// the last estimate is returned, still inside `[0, 2π]`.
pub fn solve_kepler_equation(mean_anomaly: f64, eccentricity: f64) -> f64 {
    debug_assert!(
        (0.0..1.0).contains(&eccentricity),
        "Kepler solver requires an elliptical orbit, got e = {}",
        eccentricity
    );

    let m = mean_anomaly.rem_euclid(TAU);
    let mut e_anomaly = m + eccentricity * m.sin();

    // E - e·sin(E) - M is non-decreasing, negative at 0 and positive at 2π.
    let (mut lower, mut upper) = (0.0, TAU);

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let (sin_e, cos_e) = e_anomaly.sin_cos();
        let residual = e_anomaly - eccentricity * sin_e - m;
        if residual == 0.0 {
            return e_anomaly;
        }
        if residual > 0.0 {
            upper = e_anomaly;
        } else {
            lower = e_anomaly;
        }

        let slope = 1.0 - eccentricity * cos_e;
        let curvature = eccentricity * sin_e;
        let mut next = e_anomaly
            - 2.0 * residual * slope / (2.0 * slope * slope - residual * curvature);
        if !(lower..=upper).contains(&next) {
            next = 0.5 * (lower + upper);
        }

        let delta = (next - e_anomaly).abs();
        e_anomaly = next;
        if delta < KEPLER_TOLERANCE {
            return e_anomaly;
        }
    }

    warn!(
        mean_anomaly = m,
        eccentricity, e_anomaly, "Kepler solver hit its iteration cap"
    );
    e_anomaly
}

pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half.sin();
    let x = (1.0 - eccentricity).sqrt() * half.cos();
    2.0 * y.atan2(x)
}
