//! Light-curve synthesis
//!
//! Combines star-planet and star-moon-planet occultation into a single
//! normalized brightness series over a padded time window. Occultation is
//! only evaluated inside the nominal transit window; outside it the flux is
//! the star's base intensity regardless of actual geometry, reproducing the
//! source model's simplifying assumption.

use log::debug;
use ndarray::Array1;
use std::f64::consts::PI;

use crate::config::SystemConfig;
use crate::error::ConfigError;
use crate::geometry::{disk_disk_overlap, star_disk_overlap};
use crate::projection::{moon_position, planet_position};

/// Extra window shown on each side of the transit, as a fraction of the
/// transit duration.
pub const PADDING_FACTOR: f64 = 1.5;

/// Default sample count for a synthesized curve.
pub const DEFAULT_NUM_POINTS: usize = 1000;

/// A synthesized transit light curve.
///
/// `time` (hours, centered on mid-transit) is strictly increasing and the
/// same length as `flux`. Owned by the caller; every synthesis call builds a
/// fresh pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    pub time: Array1<f64>,
    pub flux: Array1<f64>,
}

impl LightCurve {
    /// Number of samples in the curve.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterate over `(time, flux)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.flux.iter().copied())
    }
}

/// Simulate a transit light curve for a star with a planet and its moon.
///
/// The time axis spans `transit_duration/2 * (1 + 2 * PADDING_FACTOR)` on
/// each side of mid-transit with `num_points` evenly spaced samples. Within
/// `|t| <= transit_duration/2` the flux drops by the occulted fraction of
/// the stellar disk; the star-moon and planet-moon contributions apply only
/// while the moon is in front (`z >= 0`), and the planet-moon overlap is
/// subtracted so area occulted by both bodies at once is not counted twice.
/// That inclusion-exclusion combination is an approximation of the true
/// three-disk union and is kept as the source model defines it.
///
/// # Arguments
/// * `config` - System configuration; validated before any computation
/// * `num_points` - Number of samples (at least 2); see [`DEFAULT_NUM_POINTS`]
///
/// # Errors
/// [`ConfigError`] when a field is outside the engine's documented domain,
/// in particular a non-positive `transit_duration` or `moon_orbital_period`.
pub fn simulate_light_curve(
    config: &SystemConfig,
    num_points: usize,
) -> Result<LightCurve, ConfigError> {
    config.validate()?;
    assert!(num_points >= 2, "num_points must be at least 2");

    let total_duration = config.transit_duration * (1.0 + 2.0 * PADDING_FACTOR);
    let time = Array1::linspace(-total_duration / 2.0, total_duration / 2.0, num_points);
    let mut flux = Array1::from_elem(num_points, config.star_intensity);

    // Occultation applies only within the nominal transit window.
    let half_transit = config.transit_duration / 2.0;
    let transit_idx: Vec<usize> = time
        .iter()
        .enumerate()
        .filter(|(_, &t)| t.abs() <= half_transit)
        .map(|(i, _)| i)
        .collect();
    debug!(
        "light curve: {} samples, {} in transit, moon included: {}",
        num_points,
        transit_idx.len(),
        config.include_moon
    );
    if transit_idx.is_empty() {
        return Ok(LightCurve { time, flux });
    }

    let n = transit_idx.len();
    let mut planet_x = Array1::<f64>::zeros(n);
    let planet_y = Array1::<f64>::from_elem(n, config.planet_distance);
    let mut moon_x = Array1::<f64>::zeros(n);
    let mut moon_y = Array1::<f64>::zeros(n);
    let mut moon_z = Array1::<f64>::zeros(n);

    for (k, &i) in transit_idx.iter().enumerate() {
        let t = time[i];
        let planet = planet_position(
            t / config.transit_duration,
            config.star_radius,
            config.planet_distance,
        );
        let moon = moon_position(
            &planet,
            t / config.moon_orbital_period + config.moon_initial_phase,
            config.moon_distance,
            config.moon_orbital_inclination,
        );
        planet_x[k] = planet.x;
        moon_x[k] = moon.x;
        moon_y[k] = moon.y;
        moon_z[k] = moon.z;
    }

    // The planet occults regardless of the moon.
    let star_planet = star_disk_overlap(
        &planet_x,
        &planet_y,
        config.planet_radius,
        config.star_radius,
    );

    let mut star_moon = Array1::<f64>::zeros(n);
    let mut planet_moon = Array1::<f64>::zeros(n);
    if config.include_moon {
        // A single front mask gates both moon overlap terms.
        let front: Vec<usize> = (0..n).filter(|&k| moon_z[k] >= 0.0).collect();
        if !front.is_empty() {
            let front_moon_x = Array1::from_iter(front.iter().map(|&k| moon_x[k]));
            let front_moon_y = Array1::from_iter(front.iter().map(|&k| moon_y[k]));
            let front_planet_x = Array1::from_iter(front.iter().map(|&k| planet_x[k]));
            let front_planet_y = Array1::from_elem(front.len(), config.planet_distance);

            let star_moon_front = star_disk_overlap(
                &front_moon_x,
                &front_moon_y,
                config.moon_radius,
                config.star_radius,
            );
            let planet_moon_front = disk_disk_overlap(
                &front_planet_x,
                &front_planet_y,
                config.planet_radius,
                &front_moon_x,
                &front_moon_y,
                config.moon_radius,
            );
            for (j, &k) in front.iter().enumerate() {
                star_moon[k] = star_moon_front[j];
                planet_moon[k] = planet_moon_front[j];
            }
        }
    }

    let star_area = PI * config.star_radius * config.star_radius;
    for (k, &i) in transit_idx.iter().enumerate() {
        let total_overlap = star_planet[k] + star_moon[k] - planet_moon[k];
        flux[i] -= total_overlap / star_area * config.star_intensity;
    }

    Ok(LightCurve { time, flux })
}
