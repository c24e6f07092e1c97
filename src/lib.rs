//! Transit-photometry engine for a star occulted by a planet and a moon
//!
//! Pure, synchronous numeric computation: closed-form circle overlap areas,
//! time-series flux synthesis with front/back resolution of an inclined moon
//! orbit, and a static SVG orbital snapshot. No I/O, no shared state; each
//! call is independent and safe to run in parallel across configurations.

// Module declarations
mod config;
mod diagram;
mod error;
mod geometry;
mod projection;
mod transit;

#[cfg(feature = "python")]
mod python;

// Re-export public API
pub use config::{SystemConfig, PARAMETER_DEFAULTS, PARAMETER_HELP};
pub use diagram::orbital_diagram;
pub use error::ConfigError;
pub use geometry::{disk_disk_overlap, star_disk_overlap};
pub use projection::{moon_position, planet_position, BodyPosition};
pub use transit::{simulate_light_curve, LightCurve, DEFAULT_NUM_POINTS, PADDING_FACTOR};
