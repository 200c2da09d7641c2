use serde::Serialize;
use std::f64::consts::PI;
use tracing::{debug, trace};

use super::atmosphere::AtmosphericEntry;
use super::blast::{AirBlast, EjectaEffects};
use super::crater::{transient_diameter, CraterGeometry};
use super::scenario::ImpactScenarioInput;
use super::seismic::SeismicEffects;
use super::thermal::ThermalEffects;
use crate::constants::{JOULES_PER_MEGATON, THERMAL_VELOCITY_THRESHOLD_KMPS};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Airburst,
    Minimal,
    Local,
    Regional,
    Continental,
    Global,
}

impl Severity {
    /// Classify a surface impact by its energy in megatons TNT.
    pub fn from_energy(energy_megatons: f64) -> Self {
        if energy_megatons < 0.01 {
            Severity::Minimal
        } else if energy_megatons < 1.0 {
            Severity::Local
        } else if energy_megatons < 100.0 {
            Severity::Regional
        } else if energy_megatons < 10_000.0 {
            Severity::Continental
        } else {
            Severity::Global
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Severity::Airburst => "Asteroid breaks up in atmosphere, no crater formed",
            Severity::Minimal => "Airburst or surface impact with minimal effects",
            Severity::Local => "Significant local destruction",
            Severity::Regional => "Major regional catastrophe",
            Severity::Continental => "Continental-scale devastation",
            Severity::Global => "Mass extinction event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEnergy {
    pub joules: f64,
    pub megatons_tnt: f64,
}

impl ImpactEnergy {
    /// Kinetic energy of a sphere of `diameter` (m), `density` (kg/m³) and `velocity` (m/s).
    pub fn kinetic(diameter: f64, density: f64, velocity: f64) -> Self {
        let joules = (PI / 12.0) * density * diameter.powi(3) * velocity.powi(2);
        ImpactEnergy {
            joules,
            megatons_tnt: joules / JOULES_PER_MEGATON,
        }
    }

    pub fn recurrence_interval_years(&self) -> f64 {
        109.0 * self.megatons_tnt.powf(0.78)
    }
}

/// Full analysis of one impact scenario.
///
/// An airburst carries only energy, recurrence and entry data; every
/// ground-effect section is then `None`. Thermal effects are also `None` for
/// entry speeds of 15 km/s or less.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactAnalysisResult {
    pub input: ImpactScenarioInput,
    pub mean_diameter_m: f64,
    pub energy: ImpactEnergy,
    pub recurrence_interval_years: f64,
    pub atmospheric_entry: AtmosphericEntry,
    pub crater: Option<CraterGeometry>,
    pub thermal: Option<ThermalEffects>,
    pub seismic: Option<SeismicEffects>,
    pub ejecta: Option<EjectaEffects>,
    pub air_blast: Option<AirBlast>,
    pub severity: Severity,
    pub description: String,
}

pub fn simulate(input: &ImpactScenarioInput) -> Result<ImpactAnalysisResult, SimulationError> {
    input.validate()?;

    let diameter = input.mean_diameter();
    let velocity = input.velocity_m_per_sec();
    let density = input.density_kg_per_m3();
    let angle = input.impact_angle_rad();
    let distance_m = input.observer_distance_m();

    let energy = ImpactEnergy::kinetic(diameter, density, velocity);
    let recurrence_interval_years = energy.recurrence_interval_years();
    trace!(joules = energy.joules, megatons = energy.megatons_tnt, "impact energy");

    let atmospheric_entry = AtmosphericEntry::evaluate(input);

    if atmospheric_entry.is_airburst() {
        let severity = Severity::Airburst;
        return Ok(ImpactAnalysisResult {
            input: *input,
            mean_diameter_m: diameter,
            energy,
            recurrence_interval_years,
            atmospheric_entry,
            crater: None,
            thermal: None,
            seismic: None,
            ejecta: None,
            air_blast: None,
            severity,
            description: severity.description().to_string(),
        });
    }

    let transient = transient_diameter(density, diameter, velocity, angle);
    let crater = CraterGeometry::from_transient(transient, energy.joules, angle);

    let thermal = if input.velocity_km_per_sec > THERMAL_VELOCITY_THRESHOLD_KMPS {
        Some(ThermalEffects::compute(
            energy.joules,
            energy.megatons_tnt,
            velocity,
            distance_m,
        ))
    } else {
        debug!(
            velocity_km_per_sec = input.velocity_km_per_sec,
            "entry too slow for a thermal fireball"
        );
        None
    };

    let seismic = SeismicEffects::compute(energy.joules, input.observer_distance_km);
    let ejecta = EjectaEffects::compute(crater.transient_diameter, distance_m);
    let air_blast = AirBlast::compute(energy.megatons_tnt, distance_m);

    let severity = Severity::from_energy(energy.megatons_tnt);
    debug!(?severity, megatons = energy.megatons_tnt, "impact classified");

    Ok(ImpactAnalysisResult {
        input: *input,
        mean_diameter_m: diameter,
        energy,
        recurrence_interval_years,
        atmospheric_entry,
        crater: Some(crater),
        thermal,
        seismic: Some(seismic),
        ejecta: Some(ejecta),
        air_blast: Some(air_blast),
        severity,
        description: severity.description().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_system::crater::CraterType;
    use approx::assert_relative_eq;

    fn surface_scenario(velocity_km_per_sec: f64) -> ImpactScenarioInput {
        ImpactScenarioInput::new(1_000.0, 2_000.0, velocity_km_per_sec, 3.0, 45.0, 200.0).unwrap()
    }

    #[test]
    fn test_energy_scales_with_diameter_cubed() {
        let base = ImpactEnergy::kinetic(50.0, 2500.0, 12_000.0);
        let doubled = ImpactEnergy::kinetic(100.0, 2500.0, 12_000.0);
        assert_relative_eq!(doubled.joules / base.joules, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_energy_scales_with_velocity_squared() {
        let base = ImpactEnergy::kinetic(50.0, 2500.0, 12_000.0);
        let doubled = ImpactEnergy::kinetic(50.0, 2500.0, 24_000.0);
        assert_relative_eq!(doubled.joules / base.joules, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_megaton_conversion_and_recurrence() {
        let energy = ImpactEnergy {
            joules: 4.184e15,
            megatons_tnt: 1.0,
        };
        assert_relative_eq!(energy.recurrence_interval_years(), 109.0);
        let computed = ImpactEnergy::kinetic(100.0, 3000.0, 20_000.0);
        assert_relative_eq!(computed.megatons_tnt, computed.joules / 4.184e15);
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_energy(0.009), Severity::Minimal);
        assert_eq!(Severity::from_energy(0.01), Severity::Local);
        assert_eq!(Severity::from_energy(99.0), Severity::Regional);
        assert_eq!(Severity::from_energy(100.0), Severity::Continental);
        assert_eq!(Severity::from_energy(10_000.0), Severity::Global);
    }

    #[test]
    fn test_airburst_short_circuits_ground_effects() {
        let input = ImpactScenarioInput::new(25.38, 56.76, 11.569, 2.5, 45.0, 200.0).unwrap();
        let result = simulate(&input).unwrap();

        assert_eq!(result.severity, Severity::Airburst);
        assert_eq!(result.description, Severity::Airburst.description());
        assert!(result.crater.is_none());
        assert!(result.thermal.is_none());
        assert!(result.seismic.is_none());
        assert!(result.ejecta.is_none());
        assert!(result.air_blast.is_none());
        assert!(result.energy.joules > 0.0);
    }

    #[test]
    fn test_ground_reaching_fragments_run_full_pipeline() {
        let input = ImpactScenarioInput::new(100.0, 100.0, 11.0, 8.0, 45.0, 200.0).unwrap();
        let result = simulate(&input).unwrap();

        let entry = result.atmospheric_entry;
        assert!(entry.breakup_occurs);
        assert!(entry.forms_crater);
        assert!(entry.breakup_altitude_m.unwrap() > 0.0);
        assert_eq!(entry.airburst_altitude_m, None);

        let crater = result.crater.unwrap();
        let expected = transient_diameter(8_000.0, 100.0, 11_000.0, input.impact_angle_rad());
        assert_relative_eq!(crater.transient_diameter, expected);
        assert!(result.seismic.is_some());
        assert!(result.ejecta.is_some());
        assert!(result.air_blast.is_some());
        assert!(result.thermal.is_none());

        assert_relative_eq!(result.energy.megatons_tnt, 60.57, epsilon = 0.01);
        assert_eq!(result.severity, Severity::Regional);
    }

    #[test]
    fn test_thermal_section_depends_on_entry_speed() {
        let slow = simulate(&surface_scenario(15.0)).unwrap();
        let fast = simulate(&surface_scenario(15.01)).unwrap();

        assert!(slow.thermal.is_none());
        assert!(fast.thermal.is_some());
        assert!(slow.crater.is_some() && fast.crater.is_some());
    }

    #[test]
    fn test_surface_impact_has_all_ground_sections() {
        let result = simulate(&surface_scenario(20.0)).unwrap();

        let crater = result.crater.unwrap();
        assert_eq!(crater.crater_type, CraterType::Complex);
        assert!(crater.final_diameter > crater.transient_diameter);
        assert!(result.seismic.is_some());
        assert!(result.ejecta.is_some());
        assert!(result.air_blast.is_some());
        assert!(!result.atmospheric_entry.breakup_occurs);
        assert_eq!(result.severity, Severity::from_energy(result.energy.megatons_tnt));
    }

    #[test]
    fn test_far_observer_gets_finite_effects() {
        let mut input = surface_scenario(20.0);
        input.observer_distance_km = 20_000.0;
        let result = simulate(&input).unwrap();

        let ejecta = result.ejecta.unwrap();
        let thermal = result.thermal.unwrap();
        assert!(ejecta.ejection_velocity_m_per_s.is_finite());
        assert!(ejecta.thickness_m.is_finite());
        assert_eq!(thermal.visible_fraction, 0.0);
        assert!(result.seismic.unwrap().effective_magnitude.is_finite());
        assert!(result.air_blast.unwrap().overpressure_pa.is_finite());

        input.observer_distance_km = 35_000.0;
        assert!(matches!(simulate(&input), Err(SimulationError::InvalidScenario(_))));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut input = surface_scenario(20.0);
        input.impact_angle_deg = 0.0;
        assert!(matches!(simulate(&input), Err(SimulationError::InvalidScenario(_))));
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let input = surface_scenario(25.0);
        assert_eq!(simulate(&input).unwrap(), simulate(&input).unwrap());
    }
}
