pub mod constants;
pub mod data_feed;
pub mod errors;
pub mod impact_system;
pub mod orbit_system;
pub mod telemetry_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from orbit_system
pub use orbit_system::elements::{derive_from_raw_elements, ElementSet, OrbitalElements, RawElement};
pub use orbit_system::kepler::{eccentric_to_true_anomaly, solve_kepler_equation};
pub use orbit_system::propagator::{
    compute_state, generate_orbit_path, perihelion_state, state_at_elapsed_days, OrbitalState,
};

// Re-export commonly used items from impact_system
pub use impact_system::scenario::{DensityPreset, ImpactScenarioInput};
pub use impact_system::simulator::{simulate, ImpactAnalysisResult, Severity};

// Re-export commonly used items from data_feed and telemetry_system
pub use data_feed::neo::{NeoObject, SbdbOrbit, SbdbResponse, ScenarioSettings};
pub use telemetry_system::report::{impact_report, orbit_summary};

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
