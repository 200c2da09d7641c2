use serde::Serialize;
use std::f64::consts::TAU;

use super::elements::OrbitalElements;
use super::kepler::{eccentric_to_true_anomaly, solve_kepler_equation};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalState {
    /// Scene-space position: ecliptic x, ecliptic z (up), ecliptic y.
    pub position: Vector3D,
    pub true_anomaly_rad: f64,
    pub radius_au: f64,
    pub eccentric_anomaly_rad: f64,
}

/// Heliocentric ecliptic coordinates (AU) of an orbital-plane point, rotated by
/// argument of perihelion, inclination and longitude of ascending node.
fn orbital_plane_to_ecliptic(elements: &OrbitalElements, x_orb: f64, y_orb: f64) -> (f64, f64, f64) {
    let (sin_w, cos_w) = elements.argument_of_perihelion_rad.sin_cos();
    let (sin_om, cos_om) = elements.longitude_of_ascending_node_rad.sin_cos();
    let (sin_i, cos_i) = elements.inclination_rad.sin_cos();

    let x = (cos_w * cos_om - sin_w * sin_om * cos_i) * x_orb
        + (-sin_w * cos_om - cos_w * sin_om * cos_i) * y_orb;
    let y = (cos_w * sin_om + sin_w * cos_om * cos_i) * x_orb
        + (-sin_w * sin_om + cos_w * cos_om * cos_i) * y_orb;
    let z = sin_w * sin_i * x_orb + cos_w * sin_i * y_orb;

    (x, y, z)
}

pub fn compute_state(elements: &OrbitalElements, mean_anomaly_rad: f64, scale_factor: f64) -> OrbitalState {
    let e = elements.eccentricity;

    let eccentric_anomaly = solve_kepler_equation(mean_anomaly_rad, e);
    let true_anomaly = eccentric_to_true_anomaly(eccentric_anomaly, e);
    let radius = elements.semi_major_axis_au * (1.0 - e * eccentric_anomaly.cos());

    let (x, y, z) = orbital_plane_to_ecliptic(
        elements,
        radius * true_anomaly.cos(),
        radius * true_anomaly.sin(),
    );

    // The renderer treats the ecliptic plane as its horizontal x/z plane.
    let position = Vector3D::new(x, z, y) * scale_factor;
    debug_assert!(position.is_finite(), "non-finite orbit position {:?}", position);

    OrbitalState {
        position,
        true_anomaly_rad: true_anomaly,
        radius_au: radius,
        eccentric_anomaly_rad: eccentric_anomaly,
    }
}

pub fn state_at_elapsed_days(elements: &OrbitalElements, elapsed_days: f64, scale_factor: f64) -> OrbitalState {
    compute_state(elements, elements.mean_anomaly_at(elapsed_days), scale_factor)
}

pub fn perihelion_state(elements: &OrbitalElements, scale_factor: f64) -> OrbitalState {
    compute_state(elements, 0.0, scale_factor)
}

/// Closed orbit polyline of `num_points + 1` positions sampled at evenly spaced
/// mean anomalies over `[0, 2π]`; the first and last points coincide.
///
/// `num_points` is clamped to at least one segment.
pub fn generate_orbit_path(elements: &OrbitalElements, num_points: usize, scale_factor: f64) -> Vec<Vector3D> {
    let segments = num_points.max(1);

    (0..=segments)
        .map(|i| {
            let mean_anomaly = (i as f64 / segments as f64) * TAU;
            compute_state(elements, mean_anomaly, scale_factor).position
        })
        .collect()
}
