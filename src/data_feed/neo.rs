use serde::Deserialize;

use crate::errors::SimulationError;
use crate::impact_system::scenario::ImpactScenarioInput;
use crate::orbit_system::elements::{derive_from_raw_elements, OrbitalElements, RawElement};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeoObject {
    #[serde(default)]
    pub neo_reference_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    pub relative_velocity: RelativeVelocity,
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissDistance {
    #[serde(default)]
    pub astronomical: Option<String>,
    #[serde(default)]
    pub kilometers: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioSettings {
    pub density_g_per_cm3: f64,
    pub impact_angle_deg: f64,
    pub observer_distance_km: f64,
}

fn parse_number(field: &str, text: &str) -> Result<f64, SimulationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SimulationError::DataFeed(format!("{} is not a number: {:?}", field, text)))
}

impl NeoObject {
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| SimulationError::DataFeed(e.to_string()))
    }

    /// Estimated diameter range in meters.
    pub fn diameter_range_meters(&self) -> (f64, f64) {
        let range = self.estimated_diameter.kilometers;
        (
            range.estimated_diameter_min * 1000.0,
            range.estimated_diameter_max * 1000.0,
        )
    }

    fn first_approach(&self) -> Result<&CloseApproach, SimulationError> {
        self.close_approach_data.first().ok_or_else(|| {
            SimulationError::DataFeed(format!("{} has no close-approach data", self.name))
        })
    }

    /// Relative velocity (km/s) at the first listed close approach.
    pub fn approach_velocity_km_per_sec(&self) -> Result<f64, SimulationError> {
        let approach = self.first_approach()?;
        parse_number(
            "relative velocity",
            &approach.relative_velocity.kilometers_per_second,
        )
    }

    /// Miss distance (km) at the first listed close approach, if reported.
    pub fn miss_distance_km(&self) -> Option<f64> {
        let approach = self.close_approach_data.first()?;
        let kilometers = approach.miss_distance.as_ref()?.kilometers.as_deref()?;
        parse_number("miss distance", kilometers).ok()
    }

    pub fn scenario(&self, settings: &ScenarioSettings) -> Result<ImpactScenarioInput, SimulationError> {
        let (diameter_min, diameter_max) = self.diameter_range_meters();
        ImpactScenarioInput::new(
            diameter_min,
            diameter_max,
            self.approach_velocity_km_per_sec()?,
            settings.density_g_per_cm3,
            settings.impact_angle_deg,
            settings.observer_distance_km,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SbdbResponse {
    pub object: SbdbObject,
    pub orbit: SbdbOrbit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SbdbObject {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub des: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SbdbOrbit {
    pub elements: Vec<RawElement>,
    #[serde(default)]
    pub epoch: Option<String>,
}

impl SbdbOrbit {
    pub fn orbital_elements(&self) -> Result<OrbitalElements, SimulationError> {
        derive_from_raw_elements(&self.elements)
    }

    /// Element epoch as a Julian date, when present and numeric.
    pub fn epoch_jd(&self) -> Option<f64> {
        parse_number("epoch", self.epoch.as_deref()?).ok()
    }
}

impl SbdbResponse {
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| SimulationError::DataFeed(e.to_string()))
    }

    pub fn name(&self) -> &str {
        self.object
            .fullname
            .as_deref()
            .or(self.object.des.as_deref())
            .unwrap_or("unnamed object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NEO_JSON: &str = r#"{
        "neo_reference_id": "3727639",
        "name": "(2015 KT120)",
        "absolute_magnitude_h": 25.1,
        "estimated_diameter": {
            "kilometers": {"estimated_diameter_min": 0.0253837029, "estimated_diameter_max": 0.0567596853},
            "meters": {"estimated_diameter_min": 25.3837029, "estimated_diameter_max": 56.7596853}
        },
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": [{
            "close_approach_date_full": "2025-Oct-03 04:07",
            "relative_velocity": {"kilometers_per_second": "11.569203976", "kilometers_per_hour": "41649.13"},
            "miss_distance": {"astronomical": "0.266230725", "kilometers": "39827549.38855575"}
        }]
    }"#;

    const SBDB_JSON: &str = r#"{
        "object": {"fullname": "433 Eros (A898 PA)", "des": "433"},
        "orbit": {
            "epoch": "2461000.5",
            "elements": [
                {"name": "e", "value": "0.2228", "label": "e", "units": null},
                {"name": "a", "value": "1.458", "label": "a", "units": "au"},
                {"name": "i", "value": "10.83", "units": "deg"},
                {"name": "om", "value": "304.3", "units": "deg"},
                {"name": "w", "value": "178.9", "units": "deg"},
                {"name": "ma", "value": "310.5", "units": "deg"},
                {"name": "per", "value": "643.1", "units": "d"}
            ]
        }
    }"#;

    fn settings() -> ScenarioSettings {
        ScenarioSettings {
            density_g_per_cm3: 2.5,
            impact_angle_deg: 45.0,
            observer_distance_km: 200.0,
        }
    }

    #[test]
    fn test_neo_record_to_scenario() {
        let neo = NeoObject::from_json(NEO_JSON).unwrap();
        let scenario = neo.scenario(&settings()).unwrap();

        assert_relative_eq!(scenario.diameter_meters_min, 25.3837029, epsilon = 1e-9);
        assert_relative_eq!(scenario.diameter_meters_max, 56.7596853, epsilon = 1e-9);
        assert_relative_eq!(scenario.velocity_km_per_sec, 11.569203976);
        assert_relative_eq!(neo.miss_distance_km().unwrap(), 39_827_549.388_555_75);
    }

    #[test]
    fn test_missing_close_approach_is_an_error() {
        let mut neo = NeoObject::from_json(NEO_JSON).unwrap();
        neo.close_approach_data.clear();

        assert!(matches!(neo.scenario(&settings()), Err(SimulationError::DataFeed(_))));
        assert_eq!(neo.miss_distance_km(), None);
    }

    #[test]
    fn test_unparsable_velocity_is_an_error() {
        let mut neo = NeoObject::from_json(NEO_JSON).unwrap();
        neo.close_approach_data[0].relative_velocity.kilometers_per_second = "fast".to_string();

        assert!(matches!(
            neo.approach_velocity_km_per_sec(),
            Err(SimulationError::DataFeed(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            NeoObject::from_json("{\"name\": 3}"),
            Err(SimulationError::DataFeed(_))
        ));
    }

    #[test]
    fn test_sbdb_payload_to_elements() {
        let response = SbdbResponse::from_json(SBDB_JSON).unwrap();
        let elements = response.orbit.orbital_elements().unwrap();

        assert_eq!(response.name(), "433 Eros (A898 PA)");
        assert_relative_eq!(elements.semi_major_axis_au, 1.458);
        assert_relative_eq!(elements.period_days, 643.1);
        assert_relative_eq!(elements.inclination_rad, 10.83f64.to_radians());
        assert_relative_eq!(response.orbit.epoch_jd().unwrap(), 2_461_000.5);
    }
}
