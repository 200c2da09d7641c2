use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::{EARTH_RADIUS, FIREBALL_TEMPERATURE, LUMINOUS_EFFICIENCY, STEFAN_BOLTZMANN};

/// Exposure (MJ/m²) at which each effect occurs, scaled by `E_Mt^(1/6)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IgnitionThresholds {
    pub first_degree_burns: f64,
    pub second_degree_burns: f64,
    pub third_degree_burns: f64,
    pub clothing: f64,
    pub deciduous_trees: f64,
    pub grass: f64,
}

impl IgnitionThresholds {
    pub fn for_energy(energy_megatons: f64) -> Self {
        let scale = energy_megatons.powf(1.0 / 6.0);
        IgnitionThresholds {
            first_degree_burns: 0.13 * scale,
            second_degree_burns: 0.25 * scale,
            third_degree_burns: 0.42 * scale,
            clothing: 1.0 * scale,
            deciduous_trees: 0.25 * scale,
            grass: 0.38 * scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BurnSeverity {
    None,
    FirstDegree,
    SecondDegree,
    ThirdDegree,
}

impl BurnSeverity {
    /// Highest burn threshold strictly exceeded by `exposure` (MJ/m²).
    pub fn classify(exposure: f64, thresholds: &IgnitionThresholds) -> Self {
        if exposure > thresholds.third_degree_burns {
            BurnSeverity::ThirdDegree
        } else if exposure > thresholds.second_degree_burns {
            BurnSeverity::SecondDegree
        } else if exposure > thresholds.first_degree_burns {
            BurnSeverity::FirstDegree
        } else {
            BurnSeverity::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BurnSeverity::None => "None",
            BurnSeverity::FirstDegree => "First degree",
            BurnSeverity::SecondDegree => "Second degree",
            BurnSeverity::ThirdDegree => "Third degree",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalEffects {
    pub fireball_radius_m: f64,
    pub time_of_max_radiation_s: f64,
    pub visible_fraction: f64,
    pub exposure_mj_per_m2: f64,
    pub duration_s: f64,
    pub thresholds: IgnitionThresholds,
    pub burns: BurnSeverity,
    pub ignition: bool,
}

pub fn fireball_radius(energy_joules: f64) -> f64 {
    0.002 * energy_joules.powf(1.0 / 3.0)
}

/// Fraction of the fireball above the observer's horizon.
pub fn visible_fraction(distance_m: f64, fireball_radius: f64) -> f64 {
    let epicentral_angle = distance_m / EARTH_RADIUS;
    let hidden_height = (1.0 - epicentral_angle.cos()) * EARTH_RADIUS;

    if hidden_height <= 0.0 {
        1.0
    } else if hidden_height < fireball_radius {
        let gamma = (hidden_height / fireball_radius).acos();
        (2.0 / PI) * (gamma - (hidden_height / fireball_radius) * gamma.sin())
    } else {
        0.0
    }
}

impl ThermalEffects {
    pub fn compute(energy_joules: f64, energy_megatons: f64, velocity: f64, distance_m: f64) -> Self {
        let fireball_radius = fireball_radius(energy_joules);
        let visible_fraction = visible_fraction(distance_m, fireball_radius);

        let radiated = LUMINOUS_EFFICIENCY * energy_joules;
        let exposure = visible_fraction * radiated / (2.0 * PI * distance_m.powi(2));
        let duration = radiated
            / (2.0
                * PI
                * fireball_radius.powi(2)
                * STEFAN_BOLTZMANN
                * FIREBALL_TEMPERATURE.powi(4));

        let exposure_mj_per_m2 = exposure / 1e6;
        let thresholds = IgnitionThresholds::for_energy(energy_megatons);

        ThermalEffects {
            fireball_radius_m: fireball_radius,
            time_of_max_radiation_s: fireball_radius / velocity,
            visible_fraction,
            exposure_mj_per_m2,
            duration_s: duration,
            thresholds,
            burns: BurnSeverity::classify(exposure_mj_per_m2, &thresholds),
            ignition: exposure_mj_per_m2 > thresholds.deciduous_trees,
        }
    }
}
