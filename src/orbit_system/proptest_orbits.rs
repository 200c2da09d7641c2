use proptest::prelude::*;
use std::f64::consts::TAU;

use super::elements::{ElementSet, OrbitalElements};
use super::kepler::solve_kepler_equation;
use super::propagator::{compute_state, generate_orbit_path};

fn orbit(a: f64, e: f64, i: f64, om: f64, w: f64) -> OrbitalElements {
    OrbitalElements::try_from(ElementSet {
        semi_major_axis_au: Some(a),
        eccentricity: Some(e),
        inclination_rad: Some(i),
        longitude_of_ascending_node_rad: Some(om),
        argument_of_perihelion_rad: Some(w),
        mean_anomaly_rad: Some(0.0),
        ..Default::default()
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_kepler_residual_is_small(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.9999,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let e_anom = solve_kepler_equation(mean_anomaly, eccentricity);

        let error = (e_anom - eccentricity * e_anom.sin() - mean_anomaly.rem_euclid(TAU)).abs();
        prop_assert!(
            error < 1e-6,
            "M={}, e={}, E={}, error={}",
            mean_anomaly, eccentricity, e_anom, error
        );
    }

    #[test]
    fn prop_orbit_path_is_closed(
        a in 0.3f64..5.0,
        e in 0.0f64..0.9,
        i in 0.0f64..3.1,
        om in 0.0f64..6.28,
        w in 0.0f64..6.28,
    ) {
        let path = generate_orbit_path(&orbit(a, e, i, om, w), 200, 5.0);

        prop_assert_eq!(path.len(), 201);
        prop_assert_eq!(path[0], path[200]);
    }

    #[test]
    fn prop_circular_radius_is_constant(
        a in 0.3f64..5.0,
        mean_anomaly in 0.0f64..6.28,
        i in 0.0f64..3.1,
    ) {
        let state = compute_state(&orbit(a, 0.0, i, 0.4, 0.9), mean_anomaly, 1.0);

        prop_assert_eq!(state.radius_au, a);
        prop_assert!((state.position.magnitude() - a).abs() < 1e-9 * a);
    }

    #[test]
    fn prop_radius_between_apsides(
        a in 0.3f64..5.0,
        e in 0.0f64..0.95,
        mean_anomaly in 0.0f64..6.28,
    ) {
        let elements = orbit(a, e, 0.1, 0.2, 0.3);
        let state = compute_state(&elements, mean_anomaly, 1.0);

        prop_assert!(state.radius_au >= elements.perihelion_au() - 1e-12);
        prop_assert!(state.radius_au <= elements.aphelion_au() + 1e-12);
    }

    #[test]
    fn prop_compute_state_is_idempotent(
        e in 0.0f64..0.95,
        mean_anomaly in -20.0f64..20.0,
    ) {
        let elements = orbit(1.2, e, 0.5, 1.5, 2.5);
        prop_assert_eq!(
            compute_state(&elements, mean_anomaly, 5.0),
            compute_state(&elements, mean_anomaly, 5.0)
        );
    }
}
