// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const EARTH_RADIUS_KM: f64 = 6_371.0; // km
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8; // W⋅m⁻²⋅K⁻⁴
pub const JOULES_PER_MEGATON: f64 = 4.184e15; // J per Mt TNT

// Atmospheric Constants
pub const SCALE_HEIGHT: f64 = 8_000.0; // m
pub const SURFACE_AIR_DENSITY: f64 = 1.0; // kg/m³
pub const DRAG_COEFFICIENT: f64 = 2.0;
pub const PANCAKE_FACTOR: f64 = 7.0;
pub const AMBIENT_PRESSURE: f64 = 1e5; // Pa
pub const SOUND_SPEED: f64 = 330.0; // m/s

// Target Constants
pub const TARGET_DENSITY: f64 = 2_750.0; // kg/m³ (crystalline rock)
pub const SIMPLE_COMPLEX_TRANSITION_KM: f64 = 2.56; // transient diameter, km
pub const COMPLEX_TRANSITION_DIAMETER_KM: f64 = 3.2; // final diameter, km

// Thermal Constants
pub const THERMAL_VELOCITY_THRESHOLD_KMPS: f64 = 15.0; // km/s
pub const LUMINOUS_EFFICIENCY: f64 = 3e-3;
pub const FIREBALL_TEMPERATURE: f64 = 3_000.0; // K

// Seismic Constants
pub const SEISMIC_WAVE_SPEED_KMPS: f64 = 5.0; // km/s

// Air Blast Constants
pub const BLAST_REFERENCE_PRESSURE: f64 = 75_000.0; // Pa
pub const BLAST_REFERENCE_DISTANCE: f64 = 290.0; // m (1 kt scaled)

// Orbit Constants
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const KEPLER_TOLERANCE: f64 = 1e-8; // rad
pub const KEPLER_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_ORBIT_SCALE: f64 = 5.0; // scene units per AU
pub const DEFAULT_PATH_POINTS: usize = 200;
