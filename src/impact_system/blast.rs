use serde::Serialize;

use crate::constants::{
    AMBIENT_PRESSURE, BLAST_REFERENCE_DISTANCE, BLAST_REFERENCE_PRESSURE, EARTH_RADIUS, GRAVITY,
    SOUND_SPEED,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EjectaEffects {
    pub thickness_m: f64,
    pub ejection_velocity_m_per_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirBlast {
    pub overpressure_pa: f64,
    pub overpressure_bars: f64,
    pub wind_speed_m_per_s: f64,
    pub arrival_time_s: f64,
}

/// Ejecta blanket thickness (m) at `distance_m` from a crater with the given
/// transient diameter.
pub fn ejecta_thickness(transient_diameter: f64, distance_m: f64) -> f64 {
    transient_diameter.powi(4) / (112.0 * distance_m.powi(3))
}

/// Launch speed (m/s) of ballistic ejecta landing at `distance_m`.
pub fn ejection_velocity(distance_m: f64) -> f64 {
    let half_angle_tan = (distance_m / EARTH_RADIUS / 2.0).tan();
    (2.0 * GRAVITY * EARTH_RADIUS * half_angle_tan / (1.0 + half_angle_tan)).sqrt()
}

impl EjectaEffects {
    pub fn compute(transient_diameter: f64, distance_m: f64) -> Self {
        EjectaEffects {
            thickness_m: ejecta_thickness(transient_diameter, distance_m),
            ejection_velocity_m_per_s: ejection_velocity(distance_m),
        }
    }
}

/// Peak overpressure (Pa) at `distance_m` from a surface burst of `yield_kilotons`.
pub fn peak_overpressure(distance_m: f64, yield_kilotons: f64) -> f64 {
    let scaled_distance = distance_m / yield_kilotons.powf(1.0 / 3.0);
    let ratio = BLAST_REFERENCE_DISTANCE / scaled_distance;
    BLAST_REFERENCE_PRESSURE * (ratio / 4.0) * (1.0 + 3.0 * ratio.powf(1.3))
}

/// Peak wind speed (m/s) behind a shock of the given overpressure.
pub fn peak_wind_speed(overpressure: f64) -> f64 {
    let relative = overpressure / AMBIENT_PRESSURE;
    (5.0 * relative / 7.0) * SOUND_SPEED / (1.0 + 6.0 * relative / 7.0).sqrt()
}

impl AirBlast {
    pub fn compute(energy_megatons: f64, distance_m: f64) -> Self {
        let overpressure = peak_overpressure(distance_m, energy_megatons * 1000.0);

        AirBlast {
            overpressure_pa: overpressure,
            overpressure_bars: overpressure / 1e5,
            wind_speed_m_per_s: peak_wind_speed(overpressure),
            arrival_time_s: distance_m / SOUND_SPEED,
        }
    }
}
