use clap::{Parser, Subcommand, ValueEnum};
use neo_impact::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "neo-impact")]
#[command(about = "Asteroid orbit propagation and impact-effects estimation")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Propagate an orbit from a JSON element payload
    Orbit {
        /// Small-body orbit response, `{"elements": [...]}` object, or bare element list
        input: PathBuf,

        /// Path segments per revolution
        #[arg(long, default_value_t = DEFAULT_PATH_POINTS)]
        points: usize,

        /// Scene units per AU
        #[arg(long, default_value_t = DEFAULT_ORBIT_SCALE)]
        scale: f64,

        /// Days after the element epoch for the reported position
        #[arg(long, default_value_t = 0.0)]
        days: f64,

        /// Print a text summary instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Estimate the effects of an impact
    Impact {
        /// NEO-feed object JSON supplying diameter range and approach velocity
        #[arg(long, conflicts_with_all = ["diameter_min", "diameter_max", "velocity"])]
        neo: Option<PathBuf>,

        /// Minimum diameter (m)
        #[arg(long, requires_all = ["diameter_max", "velocity"])]
        diameter_min: Option<f64>,

        /// Maximum diameter (m)
        #[arg(long)]
        diameter_max: Option<f64>,

        /// Entry velocity (km/s)
        #[arg(long)]
        velocity: Option<f64>,

        /// Impactor density (g/cm³)
        #[arg(long, default_value_t = 2.5, conflicts_with = "material")]
        density: f64,

        /// Impactor composition preset
        #[arg(long, value_enum)]
        material: Option<Material>,

        /// Entry angle from horizontal (degrees)
        #[arg(long, default_value_t = 45.0)]
        angle: f64,

        /// Observer distance from ground zero (km)
        #[arg(long, default_value_t = 200.0)]
        distance: f64,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Material {
    Ice,
    PorousRock,
    Carbonaceous,
    Stony,
    Basalt,
    Iron,
    NickelIron,
}

impl From<Material> for DensityPreset {
    fn from(material: Material) -> Self {
        match material {
            Material::Ice => DensityPreset::Ice,
            Material::PorousRock => DensityPreset::PorousRock,
            Material::Carbonaceous => DensityPreset::Carbonaceous,
            Material::Stony => DensityPreset::Stony,
            Material::Basalt => DensityPreset::Basalt,
            Material::Iron => DensityPreset::Iron,
            Material::NickelIron => DensityPreset::NickelIron,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrbitPayload {
    Response(SbdbResponse),
    Orbit(SbdbOrbit),
    Elements(Vec<RawElement>),
}

#[derive(Serialize)]
struct OrbitOutput<'a> {
    name: &'a str,
    elements: &'a OrbitalElements,
    perihelion_au: f64,
    aphelion_au: f64,
    state: OrbitalState,
    path: Vec<Vector3D>,
}

fn run_orbit(
    input: PathBuf,
    points: usize,
    scale: f64,
    days: f64,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload: OrbitPayload = serde_json::from_str(&fs::read_to_string(&input)?)?;

    let (name, elements) = match &payload {
        OrbitPayload::Response(response) => (response.name(), response.orbit.orbital_elements()?),
        OrbitPayload::Orbit(orbit) => ("unnamed object", orbit.orbital_elements()?),
        OrbitPayload::Elements(raw) => ("unnamed object", derive_from_raw_elements(raw)?),
    };
    info!(name, a = elements.semi_major_axis_au, e = elements.eccentricity, "orbit loaded");

    let path = generate_orbit_path(&elements, points, scale);

    if summary {
        println!("{}", orbit_summary(name, &elements, &path));
        return Ok(());
    }

    let output = OrbitOutput {
        name,
        elements: &elements,
        perihelion_au: elements.perihelion_au(),
        aphelion_au: elements.aphelion_au(),
        state: state_at_elapsed_days(&elements, days, scale),
        path,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Orbit {
            input,
            points,
            scale,
            days,
            summary,
        } => run_orbit(input, points, scale, days, summary)?,
        Commands::Impact {
            neo,
            diameter_min,
            diameter_max,
            velocity,
            density,
            material,
            angle,
            distance,
            json,
        } => {
            let density = material.map_or(density, |m| DensityPreset::from(m).density());
            let settings = ScenarioSettings {
                density_g_per_cm3: density,
                impact_angle_deg: angle,
                observer_distance_km: distance,
            };

            let (name, input) = match neo {
                Some(path) => {
                    let neo = NeoObject::from_json(&fs::read_to_string(&path)?)?;
                    let input = neo.scenario(&settings)?;
                    (neo.name, input)
                }
                None => {
                    let (Some(min), Some(max), Some(velocity)) = (diameter_min, diameter_max, velocity)
                    else {
                        return Err("either --neo or --diameter-min, --diameter-max and --velocity are required".into());
                    };
                    let input = ImpactScenarioInput::new(min, max, velocity, density, angle, distance)?;
                    ("custom impactor".to_string(), input)
                }
            };

            let result = simulate(&input)?;
            info!(name = %name, severity = ?result.severity, "impact simulated");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", impact_report(&name, &result));
            }
        }
    }

    Ok(())
}
