use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::EARTH_RADIUS_KM;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactScenarioInput {
    pub diameter_meters_min: f64,
    pub diameter_meters_max: f64,
    pub velocity_km_per_sec: f64,
    pub density_g_per_cm3: f64,
    pub impact_angle_deg: f64,
    pub observer_distance_km: f64,
}

fn require_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidScenario(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

impl ImpactScenarioInput {
    pub fn new(
        diameter_meters_min: f64,
        diameter_meters_max: f64,
        velocity_km_per_sec: f64,
        density_g_per_cm3: f64,
        impact_angle_deg: f64,
        observer_distance_km: f64,
    ) -> Result<Self, SimulationError> {
        let input = ImpactScenarioInput {
            diameter_meters_min,
            diameter_meters_max,
            velocity_km_per_sec,
            density_g_per_cm3,
            impact_angle_deg,
            observer_distance_km,
        };
        input.validate()?;
        Ok(input)
    }

    /// Angle must lie in `(0°, 90°]` and the observer no farther than the
    /// antipode along the surface.
    pub fn validate(&self) -> Result<(), SimulationError> {
        require_positive("minimum diameter", self.diameter_meters_min)?;
        require_positive("maximum diameter", self.diameter_meters_max)?;
        if self.diameter_meters_min > self.diameter_meters_max {
            return Err(SimulationError::InvalidScenario(format!(
                "minimum diameter {} m exceeds maximum diameter {} m",
                self.diameter_meters_min, self.diameter_meters_max
            )));
        }
        require_positive("velocity", self.velocity_km_per_sec)?;
        require_positive("density", self.density_g_per_cm3)?;
        require_positive("observer distance", self.observer_distance_km)?;
        if self.observer_distance_km > PI * EARTH_RADIUS_KM {
            return Err(SimulationError::InvalidScenario(format!(
                "observer distance {} km is beyond the antipode ({:.0} km)",
                self.observer_distance_km,
                PI * EARTH_RADIUS_KM
            )));
        }

        if !(self.impact_angle_deg > 0.0 && self.impact_angle_deg <= 90.0) {
            return Err(SimulationError::InvalidScenario(format!(
                "impact angle must lie in (0, 90] degrees, got {}",
                self.impact_angle_deg
            )));
        }
        Ok(())
    }

    /// Mean impactor diameter `L0` in meters.
    pub fn mean_diameter(&self) -> f64 {
        (self.diameter_meters_min + self.diameter_meters_max) / 2.0
    }

    pub fn velocity_m_per_sec(&self) -> f64 {
        self.velocity_km_per_sec * 1000.0
    }

    pub fn density_kg_per_m3(&self) -> f64 {
        self.density_g_per_cm3 * 1000.0
    }

    pub fn impact_angle_rad(&self) -> f64 {
        self.impact_angle_deg.to_radians()
    }

    pub fn observer_distance_m(&self) -> f64 {
        self.observer_distance_km * 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DensityPreset {
    Ice,
    PorousRock,
    Carbonaceous,
    Stony,
    Basalt,
    Iron,
    NickelIron,
}

impl DensityPreset {
    pub const ALL: [DensityPreset; 7] = [
        DensityPreset::Ice,
        DensityPreset::PorousRock,
        DensityPreset::Carbonaceous,
        DensityPreset::Stony,
        DensityPreset::Basalt,
        DensityPreset::Iron,
        DensityPreset::NickelIron,
    ];

    /// Density in g/cm³.
    pub fn density(&self) -> f64 {
        match self {
            DensityPreset::Ice => 0.92,
            DensityPreset::PorousRock => 1.5,
            DensityPreset::Carbonaceous => 2.1,
            DensityPreset::Stony => 2.5,
            DensityPreset::Basalt => 2.9,
            DensityPreset::Iron => 7.8,
            DensityPreset::NickelIron => 8.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityPreset::Ice => "Ice (Comet)",
            DensityPreset::PorousRock => "Porous Rock (Pumice)",
            DensityPreset::Carbonaceous => "Carbon (Graphite)",
            DensityPreset::Stony => "Stony (Silicate)",
            DensityPreset::Basalt => "Dense Rock (Basalt)",
            DensityPreset::Iron => "Iron",
            DensityPreset::NickelIron => "Nickel-Iron",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DensityPreset::Ice => "Frozen water/comet material",
            DensityPreset::PorousRock => "Low density volcanic",
            DensityPreset::Carbonaceous => "Carbonaceous asteroid",
            DensityPreset::Stony => "Most common asteroids",
            DensityPreset::Basalt => "Volcanic rock",
            DensityPreset::Iron => "Metallic asteroid",
            DensityPreset::NickelIron => "Dense metallic core",
        }
    }
}
