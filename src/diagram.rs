//! Top-down orbital snapshot rendering
//!
//! Produces a static SVG diagram of the system at one instant: star, planet
//! track, the moon's projected orbital ellipse, and both bodies. Pure string
//! synthesis; the caller decides where the markup goes.

use std::f64::consts::TAU;

use crate::config::SystemConfig;
use crate::error::ConfigError;
use crate::projection::{moon_position, planet_position};

/// SVG viewport edge length.
const VIEW_SIZE: f64 = 500.0;
/// Blank border around the drawing.
const MARGIN: f64 = 60.0;
/// Points along the moon's projected orbital ellipse.
const ORBIT_POINTS: usize = 100;

/// Render an SVG snapshot of the system configuration.
///
/// `time_fraction` displaces the planet along its track by
/// `time_fraction * 2 * star_radius`; the moon angle comes from
/// `moon_initial_phase` alone, as in the source renderer. The moon's
/// apparent radius shrinks slightly with depth as a perspective cue.
///
/// # Errors
/// [`ConfigError`] when the configuration is outside the documented domain.
pub fn orbital_diagram(config: &SystemConfig, time_fraction: f64) -> Result<String, ConfigError> {
    config.validate()?;

    let scale = (VIEW_SIZE - 2.0 * MARGIN) / (4.0 * config.star_radius);
    let cx = VIEW_SIZE / 2.0;
    let cy = VIEW_SIZE / 2.0;

    let planet = planet_position(time_fraction, config.star_radius, config.planet_distance);
    let moon = moon_position(
        &planet,
        config.moon_initial_phase,
        config.moon_distance,
        config.moon_orbital_inclination,
    );

    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {view} {view}">
  <!-- Background -->
  <rect width="{view}" height="{view}" fill="#f8f9fa"/>
  <!-- Coordinate system -->
  <line x1="{margin}" y1="{cy}" x2="{right}" y2="{cy}" stroke="#ccc" stroke-width="1" stroke-dasharray="4"/>
  <line x1="{cx}" y1="{margin}" x2="{cx}" y2="{bottom}" stroke="#ccc" stroke-width="1" stroke-dasharray="4"/>
  <!-- Star -->
  <circle cx="{cx}" cy="{cy}" r="{star_r}" fill="#ffde00" stroke="#ff9900" stroke-width="2"/>
  <!-- Planet orbit line -->
  <line x1="{track_x1}" y1="{track_y}" x2="{track_x2}" y2="{track_y}" stroke="#666" stroke-width="1" stroke-dasharray="4"/>
"##,
        view = VIEW_SIZE,
        margin = MARGIN,
        right = VIEW_SIZE - MARGIN,
        bottom = VIEW_SIZE - MARGIN,
        cx = cx,
        cy = cy,
        star_r = config.star_radius * scale,
        track_x1 = cx - 2.0 * config.star_radius * scale,
        track_x2 = cx + 2.0 * config.star_radius * scale,
        track_y = cy + config.planet_distance * scale,
    );

    if config.include_moon {
        // Projected orbital ellipse around the planet's current position.
        let inc_cos = config.moon_orbital_inclination.to_radians().cos();
        let mut path = String::new();
        for k in 0..ORBIT_POINTS {
            let angle = TAU * k as f64 / (ORBIT_POINTS - 1) as f64;
            let orbit_x = planet.x + config.moon_distance * angle.cos();
            let orbit_y = planet.y + config.moon_distance * angle.sin() * inc_cos;
            let px = orbit_x * scale + cx;
            let py = orbit_y * scale + cy;
            if k == 0 {
                path.push_str(&format!("M {px},{py}"));
            } else {
                path.push_str(&format!(" L {px},{py}"));
            }
        }
        path.push_str(" Z");
        svg.push_str(&format!(
            "  <!-- Moon orbit -->\n  <path d=\"{path}\" fill=\"none\" stroke=\"#999\" stroke-width=\"1\" stroke-dasharray=\"4\"/>\n"
        ));
    }

    svg.push_str(&format!(
        "  <!-- Planet -->\n  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#666\"/>\n",
        cx + planet.x * scale,
        cy + planet.y * scale,
        config.planet_radius * scale,
    ));

    if config.include_moon {
        // Depth shrinks the apparent radius slightly as a perspective cue.
        let z_scale = if config.moon_distance != 0.0 {
            1.0 - 0.2 * (moon.z / config.moon_distance)
        } else {
            1.0
        };
        svg.push_str(&format!(
            "  <!-- Moon -->\n  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#999\" opacity=\"1.0\"/>\n",
            cx + moon.x * scale,
            cy + moon.y * scale,
            config.moon_radius * scale * z_scale,
        ));
    }

    svg.push_str("</svg>");
    Ok(svg)
}
