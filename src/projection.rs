//! Body positions and inclined-orbit projection
//!
//! Shared by the light-curve synthesizer and the orbital-snapshot renderer.
//! The planet sweeps the transit plane horizontally; the moon circles the
//! planet in a plane tilted by the orbital inclination, and the tilt folds
//! the in-plane sin component into a projected y offset and a line-of-sight
//! depth z.

use std::f64::consts::TAU;

/// Position of a body relative to the star center.
///
/// `x` runs along the transit direction, `y` is the impact-parameter offset,
/// and `z` is the line-of-sight depth: `z >= 0` places the body in front of
/// the star (occultation applies), `z < 0` behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Planet position at a given fraction of the transit sweep.
///
/// The transit maps linearly onto a horizontal sweep of width `2 * star_radius`
/// across the star: `fraction = t / transit_duration` for the synthesizer,
/// or the caller-supplied time fraction for a snapshot. The planet stays in
/// the transit plane, so `z = 0`.
pub fn planet_position(fraction: f64, star_radius: f64, planet_distance: f64) -> BodyPosition {
    BodyPosition {
        x: fraction * 2.0 * star_radius,
        y: planet_distance,
        z: 0.0,
    }
}

/// Moon position for an orbital angle given in turns.
///
/// The in-plane offset `(d*cos a, d*sin a)` is projected by the inclination:
/// the y component shrinks by `cos(i)` while `sin(i)` carries the remainder
/// into depth. At 0 degrees the orbit lies in the transit plane (`z = 0`
/// throughout); at 90 degrees the projected y offset vanishes and the sin
/// component is depth alone. The x offset is never foreshortened.
pub fn moon_position(
    planet: &BodyPosition,
    turns: f64,
    moon_distance: f64,
    inclination_deg: f64,
) -> BodyPosition {
    let angle = TAU * turns;
    let inc_rad = inclination_deg.to_radians();
    let rel_x = moon_distance * angle.cos();
    let rel_y = moon_distance * angle.sin();

    BodyPosition {
        x: planet.x + rel_x,
        y: planet.y + rel_y * inc_rad.cos(),
        z: rel_y * inc_rad.sin(),
    }
}
