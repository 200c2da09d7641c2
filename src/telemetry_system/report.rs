use crate::impact_system::simulator::ImpactAnalysisResult;
use crate::orbit_system::elements::OrbitalElements;
use crate::utils::vector3d::Vector3D;

pub fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 3600.0 {
        let hours = (elapsed_time / 3600.0).floor();
        let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
    } else if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", elapsed_time)
    }
}

pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else if meters >= 1.0 {
        format!("{:.2} m", meters)
    } else {
        format!("{:.2} cm", meters * 100.0)
    }
}

pub fn format_energy(megatons: f64) -> String {
    if megatons >= 1000.0 {
        format!("{:.2} Gt TNT", megatons / 1000.0)
    } else if megatons >= 1.0 {
        format!("{:.2} Mt TNT", megatons)
    } else {
        format!("{:.2} kt TNT", megatons * 1000.0)
    }
}

pub fn format_years(years: f64) -> String {
    if years >= 1e6 {
        format!("{:.2} million years", years / 1e6)
    } else {
        format!("{:.0} years", years)
    }
}

fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
    format!(
        "x = {:.precision$}, y = {:.precision$}, z = {:.precision$}",
        vec.x,
        vec.y,
        vec.z,
        precision = precision
    )
}

pub fn impact_report(name: &str, result: &ImpactAnalysisResult) -> String {
    let mut lines = vec![
        format!("--- Impact Analysis: {} ---", name),
        format!(
            "Mean Diameter: {}",
            format_distance(result.mean_diameter_m)
        ),
        format!(
            "Velocity: {:.2} km/s at {:.1}°",
            result.input.velocity_km_per_sec, result.input.impact_angle_deg
        ),
        format!(
            "Energy: {} ({:.3e} J)",
            format_energy(result.energy.megatons_tnt),
            result.energy.joules
        ),
        format!(
            "Recurrence Interval: {}",
            format_years(result.recurrence_interval_years)
        ),
        format!("Severity: {:?}, {}", result.severity, result.description),
    ];

    let entry = &result.atmospheric_entry;
    lines.push(String::new());
    lines.push("--- Atmospheric Entry ---".to_string());
    lines.push(format!("Breakup Parameter: {:.3e}", entry.breakup_parameter));
    match (entry.breakup_altitude_m, entry.airburst_altitude_m) {
        (Some(breakup), Some(airburst)) => {
            lines.push(format!("Breakup Altitude: {}", format_distance(breakup)));
            lines.push(format!("Airburst Altitude: {}", format_distance(airburst)));
        }
        (Some(breakup), None) => {
            lines.push(format!("Breakup Altitude: {}", format_distance(breakup)));
            lines.push("Fragments reach the surface".to_string());
        }
        _ => lines.push("Impactor reaches the surface intact".to_string()),
    }

    if let Some(crater) = &result.crater {
        lines.push(String::new());
        lines.push("--- Crater ---".to_string());
        lines.push(format!("Type: {:?}", crater.crater_type));
        lines.push(format!(
            "Transient: {} wide, {} deep",
            format_distance(crater.transient_diameter),
            format_distance(crater.transient_depth)
        ));
        lines.push(format!(
            "Final: {} wide, {} deep",
            format_distance(crater.final_diameter),
            format_distance(crater.depth)
        ));
        lines.push(format!(
            "Melt: {:.3e} m³ ({} thick)",
            crater.melt_volume,
            format_distance(crater.melt_thickness)
        ));
    }

    let distance = format_distance(result.input.observer_distance_m());

    if let Some(thermal) = &result.thermal {
        lines.push(String::new());
        lines.push(format!("--- Thermal Radiation at {} ---", distance));
        lines.push(format!(
            "Fireball Radius: {}",
            format_distance(thermal.fireball_radius_m)
        ));
        lines.push(format!(
            "Peak Radiation After: {}",
            format_time(thermal.time_of_max_radiation_s)
        ));
        lines.push(format!(
            "Exposure: {:.3} MJ/m² over {}",
            thermal.exposure_mj_per_m2,
            format_time(thermal.duration_s)
        ));
        lines.push(format!("Burns: {}", thermal.burns.label()));
        lines.push(format!(
            "Vegetation Ignition: {}",
            if thermal.ignition { "yes" } else { "no" }
        ));
    }

    if let Some(seismic) = &result.seismic {
        lines.push(String::new());
        lines.push(format!("--- Seismic Effects at {} ---", distance));
        lines.push(format!("Magnitude: {:.2}", seismic.magnitude));
        lines.push(format!(
            "Effective Magnitude: {:.2}",
            seismic.effective_magnitude
        ));
        lines.push(format!(
            "Mercalli Intensity: {}",
            seismic.mercalli_intensity.label()
        ));
        lines.push(format!("Arrival: {}", format_time(seismic.arrival_time_s)));
    }

    if let Some(ejecta) = &result.ejecta {
        lines.push(String::new());
        lines.push(format!("--- Ejecta at {} ---", distance));
        lines.push(format!("Thickness: {}", format_distance(ejecta.thickness_m)));
        lines.push(format!(
            "Ejection Velocity: {:.2} m/s",
            ejecta.ejection_velocity_m_per_s
        ));
    }

    if let Some(blast) = &result.air_blast {
        lines.push(String::new());
        lines.push(format!("--- Air Blast at {} ---", distance));
        lines.push(format!(
            "Overpressure: {:.0} Pa ({:.3} bar)",
            blast.overpressure_pa, blast.overpressure_bars
        ));
        lines.push(format!("Peak Wind: {:.2} m/s", blast.wind_speed_m_per_s));
        lines.push(format!("Arrival: {}", format_time(blast.arrival_time_s)));
    }

    lines.join("\n")
}

pub fn orbit_summary(name: &str, elements: &OrbitalElements, path: &[Vector3D]) -> String {
    let mut lines = vec![
        format!("--- Orbit: {} ---", name),
        format!("Semi-major Axis: {:.4} AU", elements.semi_major_axis_au),
        format!("Eccentricity: {:.4}", elements.eccentricity),
        format!(
            "Inclination: {:.2}°",
            elements.inclination_rad.to_degrees()
        ),
        format!(
            "Perihelion / Aphelion: {:.4} AU / {:.4} AU",
            elements.perihelion_au(),
            elements.aphelion_au()
        ),
        format!(
            "Period: {:.2} days ({:.2} years)",
            elements.period_days,
            elements.period_days / crate::constants::DAYS_PER_YEAR
        ),
        format!("Path Samples: {}", path.len()),
    ];
    if let Some(start) = path.first() {
        lines.push(format!("Path Start: {}", format_vector3d(start, 4)));
    }
    lines.join("\n")
}
