/// Integration tests for the transit light-curve synthesizer
/// Exercises the public API end to end: axis construction, occultation
/// masking, moon front/back gating, and boundary validation.
#[cfg(test)]
mod light_curve_tests {
    use exomoon_sim::{simulate_light_curve, ConfigError, SystemConfig, DEFAULT_NUM_POINTS};

    mod test_series_shape {
        use super::*;

        #[test]
        fn test_lengths_match_requested_count() {
            let curve =
                simulate_light_curve(&SystemConfig::default(), DEFAULT_NUM_POINTS).expect("simulate");
            assert_eq!(curve.time.len(), DEFAULT_NUM_POINTS);
            assert_eq!(curve.flux.len(), DEFAULT_NUM_POINTS);
            assert_eq!(curve.len(), DEFAULT_NUM_POINTS);
        }

        #[test]
        fn test_time_strictly_increasing() {
            let curve = simulate_light_curve(&SystemConfig::default(), 777).expect("simulate");
            for i in 1..curve.time.len() {
                assert!(
                    curve.time[i] > curve.time[i - 1],
                    "time not strictly increasing at sample {i}"
                );
            }
        }

        #[test]
        fn test_axis_symmetric_about_mid_transit() {
            let curve = simulate_light_curve(&SystemConfig::default(), 501).expect("simulate");
            let n = curve.time.len();
            assert!((curve.time[0] + curve.time[n - 1]).abs() < 1e-12);
        }
    }

    mod test_baseline {
        use super::*;

        #[test]
        fn test_flux_outside_transit_window_is_exactly_baseline() {
            let config = SystemConfig {
                star_intensity: 1.7,
                ..Default::default()
            };
            let half = config.transit_duration / 2.0;
            let curve = simulate_light_curve(&config, 999).expect("simulate");
            for (t, f) in curve.samples() {
                if t.abs() > half {
                    assert_eq!(
                        f, config.star_intensity,
                        "flux at t={t} outside the transit window must be untouched"
                    );
                }
            }
        }

        #[test]
        fn test_grazing_config_still_baseline_outside_window() {
            // Planet track offset past the stellar limb: no dip anywhere.
            let config = SystemConfig {
                planet_distance: 1.5,
                include_moon: false,
                ..Default::default()
            };
            let curve = simulate_light_curve(&config, 301).expect("simulate");
            for (_, f) in curve.samples() {
                assert_eq!(f, config.star_intensity);
            }
        }
    }

    mod test_moon_gating {
        use super::*;

        #[test]
        fn test_excluded_moon_parameters_are_ignored() {
            let base = SystemConfig {
                include_moon: false,
                ..Default::default()
            };
            let wild = SystemConfig {
                moon_radius: 0.09,
                moon_distance: 0.45,
                moon_orbital_period: 3.0,
                moon_initial_phase: 0.8,
                moon_orbital_inclination: -60.0,
                ..base.clone()
            };
            let a = simulate_light_curve(&base, 400).expect("simulate");
            let b = simulate_light_curve(&wild, 400).expect("simulate");
            assert_eq!(a.flux, b.flux);
            assert_eq!(a.time, b.time);
        }

        #[test]
        fn test_face_on_moon_behind_planet_never_occults() {
            // At 90 degrees the sin component of the orbit is pure depth.
            // A slow moon held at phase ~0.75 keeps sin(angle) < 0 across the
            // whole window, so it stays behind and contributes nothing.
            let with_moon = SystemConfig {
                transit_duration: 2.0,
                planet_distance: 0.0,
                moon_orbital_period: 1000.0,
                moon_initial_phase: 0.75,
                moon_orbital_inclination: 90.0,
                include_moon: true,
                ..Default::default()
            };
            let without = SystemConfig {
                include_moon: false,
                ..with_moon.clone()
            };
            let a = simulate_light_curve(&with_moon, 600).expect("simulate");
            let b = simulate_light_curve(&without, 600).expect("simulate");
            assert_eq!(a.flux, b.flux);
        }

        #[test]
        fn test_face_on_moon_in_front_still_occults() {
            // The x offset is not foreshortened at 90 degrees: a front-side
            // moon clear of the planet's disk deepens the dip.
            let with_moon = SystemConfig {
                transit_duration: 2.0,
                planet_distance: 0.0,
                moon_orbital_period: 1000.0,
                moon_initial_phase: 0.1,
                moon_orbital_inclination: 90.0,
                include_moon: true,
                ..Default::default()
            };
            let without = SystemConfig {
                include_moon: false,
                ..with_moon.clone()
            };
            let a = simulate_light_curve(&with_moon, 600).expect("simulate");
            let b = simulate_light_curve(&without, 600).expect("simulate");
            let min_with = a.flux.iter().cloned().fold(f64::INFINITY, f64::min);
            let min_without = b.flux.iter().cloned().fold(f64::INFINITY, f64::min);
            assert!(
                min_with < min_without,
                "front-side face-on moon should deepen the dip ({min_with} vs {min_without})"
            );
        }

        #[test]
        fn test_edge_on_moon_always_eligible() {
            // At zero inclination z = 0 everywhere, which counts as in front;
            // a large moon on a tight orbit must change the curve.
            let with_moon = SystemConfig {
                planet_distance: 0.0,
                moon_radius: 0.08,
                moon_distance: 0.3,
                moon_orbital_inclination: 0.0,
                include_moon: true,
                ..Default::default()
            };
            let without = SystemConfig {
                include_moon: false,
                ..with_moon.clone()
            };
            let a = simulate_light_curve(&with_moon, 600).expect("simulate");
            let b = simulate_light_curve(&without, 600).expect("simulate");
            assert_ne!(a.flux, b.flux);
        }
    }

    mod test_concrete_scenario {
        use super::*;

        #[test]
        fn test_five_sample_planet_only_transit() {
            // Samples land at -8, -4, 0, 4, 8 hours; only t = 0 is in
            // transit, with the planet dead center and fully inside the star.
            let config = SystemConfig {
                star_radius: 1.0,
                star_intensity: 1.0,
                planet_radius: 0.1,
                planet_distance: 0.0,
                transit_duration: 4.0,
                include_moon: false,
                ..Default::default()
            };
            let curve = simulate_light_curve(&config, 5).expect("simulate");
            assert_eq!(curve.flux[0], 1.0);
            assert_eq!(curve.flux[1], 1.0);
            assert!(
                (curve.flux[2] - 0.99).abs() < 1e-12,
                "mid-transit flux should be 1 - r_p^2 = 0.99, got {}",
                curve.flux[2]
            );
            assert_eq!(curve.flux[3], 1.0);
            assert_eq!(curve.flux[4], 1.0);
        }
    }

    mod test_purity {
        use super::*;

        #[test]
        fn test_identical_inputs_give_bit_identical_output() {
            let config = SystemConfig {
                moon_orbital_inclination: 30.0,
                moon_initial_phase: 0.4,
                ..Default::default()
            };
            let a = simulate_light_curve(&config, 1000).expect("simulate");
            let b = simulate_light_curve(&config, 1000).expect("simulate");
            assert_eq!(a.time, b.time);
            assert_eq!(a.flux, b.flux);
        }
    }

    mod test_validation {
        use super::*;

        #[test]
        fn test_zero_transit_duration_is_rejected() {
            let config = SystemConfig {
                transit_duration: 0.0,
                ..Default::default()
            };
            assert_eq!(
                simulate_light_curve(&config, 100),
                Err(ConfigError::NonPositive {
                    name: "transit_duration",
                    value: 0.0
                })
            );
        }

        #[test]
        fn test_zero_moon_period_is_rejected() {
            let config = SystemConfig {
                moon_orbital_period: 0.0,
                ..Default::default()
            };
            assert!(matches!(
                simulate_light_curve(&config, 100),
                Err(ConfigError::NonPositive {
                    name: "moon_orbital_period",
                    ..
                })
            ));
        }

        #[test]
        fn test_no_nan_in_output_for_tight_geometry() {
            // A grazing transit sweeps through the partial-overlap branch
            // near tangency; clamping must keep every sample finite.
            let config = SystemConfig {
                planet_radius: 0.2,
                planet_distance: 1.05,
                moon_radius: 0.1,
                moon_distance: 0.1,
                moon_orbital_period: 2.0,
                include_moon: true,
                ..Default::default()
            };
            let curve = simulate_light_curve(&config, 2000).expect("simulate");
            assert!(curve.flux.iter().all(|f| f.is_finite()));
        }
    }
}
