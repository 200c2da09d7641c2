use serde::Serialize;
use tracing::debug;

use super::scenario::ImpactScenarioInput;
use crate::constants::{DRAG_COEFFICIENT, PANCAKE_FACTOR, SCALE_HEIGHT, SURFACE_AIR_DENSITY};

/// Largest impactor (m) that can fragment in the atmosphere.
const MAX_BREAKUP_DIAMETER: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphericEntry {
    pub breakup_parameter: f64,
    pub breakup_occurs: bool,
    pub breakup_altitude_m: Option<f64>,
    pub airburst_altitude_m: Option<f64>,
    pub forms_crater: bool,
}

/// Single-layer exponential atmosphere, kg/m³.
pub fn air_density_at(altitude: f64) -> f64 {
    SURFACE_AIR_DENSITY * (-altitude / SCALE_HEIGHT).exp()
}

/// Empirical yield strength of the impactor in Pa.
pub fn impactor_strength(density_g_per_cm3: f64) -> f64 {
    10f64.powf(2.107 + 0.0624 * density_g_per_cm3)
}

/// Breakup parameter `I_f`; the impactor fragments when it drops below one.
pub fn breakup_parameter(
    strength: f64,
    density: f64,
    diameter: f64,
    velocity: f64,
    angle_rad: f64,
) -> f64 {
    (4.07 * DRAG_COEFFICIENT * SCALE_HEIGHT * strength)
        / (density * diameter * velocity.powi(2) * angle_rad.sin())
}

/// Altitude (m) at which aerodynamic stress first exceeds the impactor strength.
pub fn breakup_altitude(strength: f64, velocity: f64, breakup_parameter: f64) -> f64 {
    -SCALE_HEIGHT
        * ((strength / (SURFACE_AIR_DENSITY * velocity.powi(2))).ln() + 1.308
            - 0.314 * breakup_parameter
            - 1.303 * (1.0 - breakup_parameter).sqrt())
}

/// Length scale (m) over which the fragmented cloud spreads.
pub fn dispersion_length(diameter: f64, angle_rad: f64, density: f64, breakup_altitude: f64) -> f64 {
    diameter
        * angle_rad.sin()
        * (density / (DRAG_COEFFICIENT * air_density_at(breakup_altitude))).sqrt()
}

/// Altitude (m) at which the pancaking cloud reaches `PANCAKE_FACTOR` times its
/// initial diameter. Non-positive values mean the debris reaches the ground.
pub fn airburst_altitude(breakup_altitude: f64, dispersion_length: f64) -> f64 {
    breakup_altitude
        - 2.0
            * SCALE_HEIGHT
            * (1.0
                + dispersion_length / (2.0 * SCALE_HEIGHT) * (PANCAKE_FACTOR.powi(2) - 1.0).sqrt())
            .ln()
}

impl AtmosphericEntry {
    pub fn evaluate(input: &ImpactScenarioInput) -> Self {
        let diameter = input.mean_diameter();
        let velocity = input.velocity_m_per_sec();
        let density = input.density_kg_per_m3();
        let angle = input.impact_angle_rad();

        let strength = impactor_strength(input.density_g_per_cm3);
        let i_f = breakup_parameter(strength, density, diameter, velocity, angle);

        if i_f >= 1.0 || diameter >= MAX_BREAKUP_DIAMETER {
            debug!(breakup_parameter = i_f, diameter, "impactor reaches surface intact");
            return AtmosphericEntry {
                breakup_parameter: i_f,
                breakup_occurs: false,
                breakup_altitude_m: None,
                airburst_altitude_m: None,
                forms_crater: true,
            };
        }

        let z_star = breakup_altitude(strength, velocity, i_f);
        let spread = dispersion_length(diameter, angle, density, z_star);
        let z_b = airburst_altitude(z_star, spread);
        debug!(
            breakup_parameter = i_f,
            breakup_altitude = z_star,
            airburst_altitude = z_b,
            "impactor fragments in the atmosphere"
        );

        AtmosphericEntry {
            breakup_parameter: i_f,
            breakup_occurs: true,
            breakup_altitude_m: Some(z_star),
            airburst_altitude_m: (z_b > 0.0).then_some(z_b),
            forms_crater: z_b <= 0.0,
        }
    }

    pub fn is_airburst(&self) -> bool {
        self.airburst_altitude_m.is_some()
    }
}
