use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::constants::DAYS_PER_YEAR;
use crate::errors::SimulationError;

/// Validated Keplerian elements of a bound heliocentric orbit.
///
/// Angles are stored in radians normalized to `[0, 2π)`. Both the period and
/// the mean motion are always populated, whichever of them the source supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_rad: f64,
    pub longitude_of_ascending_node_rad: f64,
    pub argument_of_perihelion_rad: f64,
    pub mean_anomaly_rad: f64,
    pub mean_motion_rad_per_day: f64,
    pub period_days: f64,
}

/// Partially known element set, as assembled from an ephemeris source before
/// validation. Angles are in radians.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSet {
    pub semi_major_axis_au: Option<f64>,
    pub eccentricity: Option<f64>,
    pub inclination_rad: Option<f64>,
    pub longitude_of_ascending_node_rad: Option<f64>,
    pub argument_of_perihelion_rad: Option<f64>,
    pub mean_anomaly_rad: Option<f64>,
    pub mean_motion_rad_per_day: Option<f64>,
    pub period_days: Option<f64>,
}

/// One named entry of an ephemeris element list, e.g. `{"name": "e", "value": "0.21"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawElement {
    pub name: String,
    pub value: ElementValue,
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    Number(f64),
    Text(String),
}

impl RawElement {
    pub fn new(name: &str, value: &str) -> Self {
        RawElement {
            name: name.to_string(),
            value: ElementValue::Text(value.to_string()),
            units: None,
        }
    }

    fn numeric_value(&self) -> Result<f64, SimulationError> {
        let parsed = match &self.value {
            ElementValue::Number(v) => Some(*v),
            ElementValue::Text(text) => text.trim().parse::<f64>().ok(),
        };

        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(SimulationError::InvalidElements(format!(
                "element `{}` has non-numeric value {:?}",
                self.name, self.value
            ))),
        }
    }
}

/// Period in days of an orbit with the given semi-major axis (Kepler's third law).
pub fn period_from_semi_major_axis(semi_major_axis_au: f64) -> f64 {
    DAYS_PER_YEAR * semi_major_axis_au.powf(1.5)
}

pub fn semi_major_axis_from_period(period_days: f64) -> f64 {
    (period_days / DAYS_PER_YEAR).powf(2.0 / 3.0)
}

impl OrbitalElements {
    pub fn perihelion_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 - self.eccentricity)
    }

    pub fn aphelion_au(&self) -> f64 {
        self.semi_major_axis_au * (1.0 + self.eccentricity)
    }

    /// Mean anomaly after `elapsed_days` past the element epoch, unnormalized.
    pub fn mean_anomaly_at(&self, elapsed_days: f64) -> f64 {
        self.mean_anomaly_rad + self.mean_motion_rad_per_day * elapsed_days
    }
}

fn positive(name: &str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidElements(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

fn angle(value: Option<f64>, name: &'static str) -> Result<f64, SimulationError> {
    let value = value.ok_or(SimulationError::MissingElement(name))?;
    if !value.is_finite() {
        return Err(SimulationError::InvalidElements(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(value.rem_euclid(TAU))
}

impl TryFrom<ElementSet> for OrbitalElements {
    type Error = SimulationError;

    fn try_from(set: ElementSet) -> Result<Self, Self::Error> {
        let eccentricity = set
            .eccentricity
            .ok_or(SimulationError::MissingElement("e"))?;
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(SimulationError::InvalidElements(format!(
                "eccentricity must lie in [0, 1) for a bound orbit, got {}",
                eccentricity
            )));
        }

        let period = set.period_days.map(|p| positive("period", p)).transpose()?;
        let mean_motion = set
            .mean_motion_rad_per_day
            .map(|n| positive("mean motion", n))
            .transpose()?;

        let semi_major_axis_au = match (set.semi_major_axis_au, period, mean_motion) {
            (Some(a), _, _) => positive("semi-major axis", a)?,
            (None, Some(p), _) => semi_major_axis_from_period(p),
            (None, None, Some(n)) => semi_major_axis_from_period(TAU / n),
            (None, None, None) => return Err(SimulationError::MissingElement("a")),
        };

        let period_days = period.unwrap_or_else(|| period_from_semi_major_axis(semi_major_axis_au));
        let mean_motion_rad_per_day = mean_motion.unwrap_or(TAU / period_days);

        Ok(OrbitalElements {
            semi_major_axis_au,
            eccentricity,
            inclination_rad: angle(set.inclination_rad, "i")?,
            longitude_of_ascending_node_rad: angle(set.longitude_of_ascending_node_rad, "om")?,
            argument_of_perihelion_rad: angle(set.argument_of_perihelion_rad, "w")?,
            mean_anomaly_rad: angle(set.mean_anomaly_rad, "ma")?,
            mean_motion_rad_per_day,
            period_days,
        })
    }
}

/// Map an ephemeris element list onto validated elements.
///
/// Recognized names are `a` (AU), `e`, `i`, `om`, `w`, `ma` (degrees), `n`
/// (degrees/day) and `per` (days). Other names are ignored; a repeated name
/// keeps its last value.
pub fn derive_from_raw_elements(raw: &[RawElement]) -> Result<OrbitalElements, SimulationError> {
    let mut set = ElementSet::default();

    for element in raw {
        let slot = match element.name.as_str() {
            "a" => &mut set.semi_major_axis_au,
            "e" => &mut set.eccentricity,
            "i" => &mut set.inclination_rad,
            "om" => &mut set.longitude_of_ascending_node_rad,
            "w" => &mut set.argument_of_perihelion_rad,
            "ma" => &mut set.mean_anomaly_rad,
            "n" => &mut set.mean_motion_rad_per_day,
            "per" => &mut set.period_days,
            _ => continue,
        };

        let value = element.numeric_value()?;
        *slot = Some(match element.name.as_str() {
            "i" | "om" | "w" | "ma" | "n" => value.to_radians(),
            _ => value,
        });
    }

    OrbitalElements::try_from(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_raw() -> Vec<RawElement> {
        vec![
            RawElement::new("e", "0.2"),
            RawElement::new("a", "1.5"),
            RawElement::new("q", "1.2"),
            RawElement::new("i", "10.0"),
            RawElement::new("om", "80.0"),
            RawElement::new("w", "-90.0"),
            RawElement::new("ma", "370.0"),
        ]
    }

    #[test]
    fn test_derive_converts_degrees_and_normalizes() {
        let elements = derive_from_raw_elements(&sample_raw()).unwrap();

        assert_relative_eq!(elements.semi_major_axis_au, 1.5);
        assert_relative_eq!(elements.eccentricity, 0.2);
        assert_relative_eq!(elements.inclination_rad, 10.0_f64.to_radians());
        assert_relative_eq!(elements.argument_of_perihelion_rad, 270.0_f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(elements.mean_anomaly_rad, 10.0_f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_period_and_mean_motion_derived_from_semi_major_axis() {
        let elements = derive_from_raw_elements(&sample_raw()).unwrap();

        let expected_period = 365.25 * 1.5_f64.powf(1.5);
        assert_relative_eq!(elements.period_days, expected_period);
        assert_relative_eq!(elements.mean_motion_rad_per_day, TAU / expected_period);
    }

    #[test]
    fn test_supplied_mean_motion_wins() {
        let mut raw = sample_raw();
        raw.push(RawElement::new("n", "0.5"));
        raw.push(RawElement::new("per", "670"));
        let elements = derive_from_raw_elements(&raw).unwrap();

        assert_relative_eq!(elements.mean_motion_rad_per_day, 0.5_f64.to_radians());
        assert_relative_eq!(elements.period_days, 670.0);
    }

    #[test]
    fn test_semi_major_axis_recovered_from_period() {
        let mut raw: Vec<RawElement> = sample_raw().into_iter().filter(|r| r.name != "a").collect();
        raw.push(RawElement::new("per", "365.25"));
        let elements = derive_from_raw_elements(&raw).unwrap();

        assert_relative_eq!(elements.semi_major_axis_au, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_semi_major_axis_is_rejected() {
        let raw: Vec<RawElement> = sample_raw().into_iter().filter(|r| r.name != "a").collect();
        assert_eq!(
            derive_from_raw_elements(&raw),
            Err(SimulationError::MissingElement("a"))
        );
    }

    #[test]
    fn test_missing_angle_is_rejected() {
        let raw: Vec<RawElement> = sample_raw().into_iter().filter(|r| r.name != "om").collect();
        assert_eq!(
            derive_from_raw_elements(&raw),
            Err(SimulationError::MissingElement("om"))
        );
    }

    #[test]
    fn test_unbound_eccentricity_is_rejected() {
        let mut raw = sample_raw();
        raw.push(RawElement::new("e", "1.0"));
        assert!(matches!(
            derive_from_raw_elements(&raw),
            Err(SimulationError::InvalidElements(_))
        ));
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let mut raw = sample_raw();
        raw.push(RawElement::new("a", "n/a"));
        assert!(matches!(
            derive_from_raw_elements(&raw),
            Err(SimulationError::InvalidElements(_))
        ));
    }

    #[test]
    fn test_raw_element_accepts_numbers_and_strings() {
        let raw: Vec<RawElement> = serde_json::from_str(
            r#"[{"name": "a", "value": 2.0}, {"name": "e", "value": "0.1", "units": null}]"#,
        )
        .unwrap();

        assert_eq!(raw[0].numeric_value(), Ok(2.0));
        assert_eq!(raw[1].numeric_value(), Ok(0.1));
    }

    #[test]
    fn test_perihelion_and_aphelion() {
        let elements = derive_from_raw_elements(&sample_raw()).unwrap();
        assert_relative_eq!(elements.perihelion_au(), 1.2);
        assert_relative_eq!(elements.aphelion_au(), 1.8);
    }
}
