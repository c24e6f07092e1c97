//! System configuration for transit simulations
//!
//! All radii and distances share one length unit (stellar radii in
//! practice); the engine assumes no particular unit scale. Durations and
//! periods are in hours.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Star, planet and moon parameters for one simulation run.
///
/// An immutable value struct; every synthesis call takes a reference and
/// recomputes from scratch. Fields left out of a serialized form take the
/// dashboard defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Radius of the star
    pub star_radius: f64,
    /// Base intensity of the star; the out-of-transit flux baseline
    pub star_intensity: f64,
    /// Radius of the planet
    pub planet_radius: f64,
    /// Perpendicular offset of the planet track from the star center
    pub planet_distance: f64,
    /// Duration of the transit in hours
    pub transit_duration: f64,
    /// Radius of the moon
    pub moon_radius: f64,
    /// Distance of the moon from the planet center
    pub moon_distance: f64,
    /// Orbital period of the moon around the planet in hours
    pub moon_orbital_period: f64,
    /// Initial orbital phase of the moon in turns, interpreted mod 1
    pub moon_initial_phase: f64,
    /// Inclination of the moon orbit relative to the transit plane in
    /// degrees; 0 = edge-on (in the transit plane), 90 = face-on
    pub moon_orbital_inclination: f64,
    /// Whether the moon contributes to the simulation
    pub include_moon: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            star_radius: 1.0,
            star_intensity: 1.0,
            planet_radius: 0.1,
            planet_distance: 0.5,
            transit_duration: 4.0,
            moon_radius: 0.03,
            moon_distance: 0.2,
            moon_orbital_period: 24.0,
            moon_initial_phase: 0.0,
            moon_orbital_inclination: 0.0,
            include_moon: true,
        }
    }
}

impl SystemConfig {
    /// Check every field against the engine's documented domain.
    ///
    /// Divisions inside the synthesizer use `transit_duration` and
    /// `moon_orbital_period`; both are rejected here when non-positive so
    /// the engine never divides by zero. The orbital angle is evaluated
    /// whether or not the moon is included, so the period is validated
    /// unconditionally.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("star_radius", self.star_radius),
            ("star_intensity", self.star_intensity),
            ("planet_radius", self.planet_radius),
            ("planet_distance", self.planet_distance),
            ("transit_duration", self.transit_duration),
            ("moon_radius", self.moon_radius),
            ("moon_distance", self.moon_distance),
            ("moon_orbital_period", self.moon_orbital_period),
            ("moon_initial_phase", self.moon_initial_phase),
            ("moon_orbital_inclination", self.moon_orbital_inclination),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        for (name, value) in [
            ("star_radius", self.star_radius),
            ("star_intensity", self.star_intensity),
            ("planet_radius", self.planet_radius),
            ("transit_duration", self.transit_duration),
            ("moon_orbital_period", self.moon_orbital_period),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("planet_distance", self.planet_distance),
            ("moon_radius", self.moon_radius),
            ("moon_distance", self.moon_distance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        Ok(())
    }

    /// Deserialize a configuration from JSON; absent fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Default values for every dashboard parameter, keyed by name.
///
/// Numeric parameters only; `include_moon` defaults to true and lives in
/// [`SystemConfig::default`]. The `time` entry is the orbital-snapshot time
/// fraction, which is not a `SystemConfig` field.
pub static PARAMETER_DEFAULTS: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
    BTreeMap::from([
        ("star_radius", 1.0),
        ("star_intensity", 1.0),
        ("planet_radius", 0.1),
        ("planet_distance", 0.5),
        ("transit_duration", 4.0),
        ("moon_radius", 0.03),
        ("moon_distance", 0.2),
        ("moon_orbital_period", 24.0),
        ("moon_initial_phase", 0.0),
        ("moon_orbital_inclination", 0.0),
        ("time", 0.0),
    ])
});

/// Help text for every dashboard parameter, keyed by name.
pub static PARAMETER_HELP: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("star_radius", "Radius of the star (arbitrary units)"),
        ("star_intensity", "Base intensity of the star (arbitrary units)"),
        ("planet_radius", "Radius of the planet relative to star radius"),
        (
            "planet_distance",
            "Distance of planet from star center in transit plane",
        ),
        ("transit_duration", "Duration of the transit in hours"),
        ("moon_radius", "Radius of the moon relative to star radius"),
        ("moon_distance", "Distance of moon from planet center"),
        (
            "moon_orbital_period",
            "Orbital period of moon around planet in hours",
        ),
        ("moon_initial_phase", "Initial orbital phase of moon (0-1)"),
        (
            "moon_orbital_inclination",
            "Inclination of moon orbit relative to transit plane (degrees)",
        ),
        (
            "include_moon",
            "Whether to include the moon in the simulation",
        ),
        ("time", "Current time in the simulation"),
    ])
});
