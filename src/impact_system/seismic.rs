use serde::Serialize;

use crate::constants::{EARTH_RADIUS_KM, SEISMIC_WAVE_SPEED_KMPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MercalliIntensity {
    I,
    IToII,
    IIIToIV,
    IVToV,
    VIToVII,
    VIIToVIII,
    IXToX,
    XToXI,
    XII,
}

impl MercalliIntensity {
    pub fn from_magnitude(effective_magnitude: f64) -> Self {
        match effective_magnitude {
            m if m < 2.0 => MercalliIntensity::I,
            m if m < 3.0 => MercalliIntensity::IToII,
            m if m < 4.0 => MercalliIntensity::IIIToIV,
            m if m < 5.0 => MercalliIntensity::IVToV,
            m if m < 6.0 => MercalliIntensity::VIToVII,
            m if m < 7.0 => MercalliIntensity::VIIToVIII,
            m if m < 8.0 => MercalliIntensity::IXToX,
            m if m < 9.0 => MercalliIntensity::XToXI,
            _ => MercalliIntensity::XII,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MercalliIntensity::I => "I",
            MercalliIntensity::IToII => "I-II",
            MercalliIntensity::IIIToIV => "III-IV",
            MercalliIntensity::IVToV => "IV-V",
            MercalliIntensity::VIToVII => "VI-VII",
            MercalliIntensity::VIIToVIII => "VII-VIII",
            MercalliIntensity::IXToX => "IX-X",
            MercalliIntensity::XToXI => "X-XI",
            MercalliIntensity::XII => "XII",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeismicEffects {
    pub magnitude: f64,
    pub effective_magnitude: f64,
    pub mercalli_intensity: MercalliIntensity,
    pub arrival_time_s: f64,
}

pub fn seismic_magnitude(energy_joules: f64) -> f64 {
    0.67 * energy_joules.log10() - 5.87
}

/// Magnitude felt at `distance_km`, attenuated in three distance regimes.
pub fn effective_magnitude(magnitude: f64, distance_km: f64) -> f64 {
    if distance_km < 60.0 {
        magnitude - 0.0238 * distance_km
    } else if distance_km < 700.0 {
        magnitude - 0.0048 * distance_km - 1.1644
    } else {
        let epicentral_angle = distance_km / EARTH_RADIUS_KM;
        magnitude - 1.66 * epicentral_angle.log10() - 6.399
    }
}

impl SeismicEffects {
    pub fn compute(energy_joules: f64, distance_km: f64) -> Self {
        let magnitude = seismic_magnitude(energy_joules);
        let effective_magnitude = effective_magnitude(magnitude, distance_km);

        SeismicEffects {
            magnitude,
            effective_magnitude,
            mercalli_intensity: MercalliIntensity::from_magnitude(effective_magnitude),
            arrival_time_s: distance_km / SEISMIC_WAVE_SPEED_KMPS,
        }
    }
}
