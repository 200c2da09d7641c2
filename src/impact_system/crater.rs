use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

use crate::constants::{
    COMPLEX_TRANSITION_DIAMETER_KM, GRAVITY, SIMPLE_COMPLEX_TRANSITION_KM, TARGET_DENSITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CraterType {
    Simple,
    Complex,
}

impl CraterType {
    /// Classify by transient diameter in meters; complex strictly above 2.56 km.
    pub fn classify(transient_diameter: f64) -> Self {
        if transient_diameter / 1000.0 > SIMPLE_COMPLEX_TRANSITION_KM {
            CraterType::Complex
        } else {
            CraterType::Simple
        }
    }
}

/// Crater geometry; all lengths in meters, volumes in m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraterGeometry {
    pub transient_diameter: f64,
    pub transient_depth: f64,
    pub final_diameter: f64,
    pub depth: f64,
    pub crater_type: CraterType,
    pub melt_volume: f64,
    pub melt_thickness: f64,
}

/// Transient crater diameter (m) from impactor density (kg/m³), diameter (m),
/// velocity (m/s) and angle from horizontal.
pub fn transient_diameter(density: f64, diameter: f64, velocity: f64, angle_rad: f64) -> f64 {
    1.161
        * (density / TARGET_DENSITY).powf(1.0 / 3.0)
        * diameter.powf(0.78)
        * velocity.powf(0.44)
        * GRAVITY.powf(-0.22)
        * angle_rad.sin().powf(1.0 / 3.0)
}

/// Final diameter and depth (m) of a crater that collapses with central uplift.
fn complex_final_shape(transient_diameter: f64) -> (f64, f64) {
    let transient_km = transient_diameter / 1000.0;
    let final_km = 1.17 * transient_km.powf(1.13) / COMPLEX_TRANSITION_DIAMETER_KM.powf(0.13);
    let depth_km = 0.4 * final_km.powf(0.3);
    (final_km * 1000.0, depth_km * 1000.0)
}

/// Final diameter and depth (m) of a bowl-shaped crater partly filled by a breccia lens.
fn simple_final_shape(transient_diameter: f64, transient_depth: f64) -> (f64, f64) {
    let final_diameter = 1.25 * transient_diameter;
    let breccia_volume = 0.032 * final_diameter.powi(3);
    let rim_height = 0.07 * transient_diameter.powi(4) / final_diameter.powi(3);
    let breccia_thickness = 2.8 * breccia_volume * (transient_depth + rim_height)
        / (transient_depth * (final_diameter / 2.0).powi(2));

    (
        final_diameter,
        transient_depth + rim_height - breccia_thickness,
    )
}

/// Impact melt volume (m³) from impact energy (J).
pub fn melt_volume(energy_joules: f64, angle_rad: f64) -> f64 {
    8.9e-12 * energy_joules * angle_rad.sin()
}

impl CraterGeometry {
    pub fn from_transient(transient_diameter: f64, energy_joules: f64, angle_rad: f64) -> Self {
        let transient_depth = transient_diameter / (2.0 * 2f64.sqrt());
        let crater_type = CraterType::classify(transient_diameter);

        let (final_diameter, depth) = match crater_type {
            CraterType::Complex => complex_final_shape(transient_diameter),
            CraterType::Simple => simple_final_shape(transient_diameter, transient_depth),
        };

        let melt_volume = melt_volume(energy_joules, angle_rad);
        let melt_thickness = 4.0 * melt_volume / (PI * transient_diameter.powi(2));

        debug!(?crater_type, transient_diameter, final_diameter, "crater formed");

        CraterGeometry {
            transient_diameter,
            transient_depth,
            final_diameter,
            depth,
            crater_type,
            melt_volume,
            melt_thickness,
        }
    }
}
