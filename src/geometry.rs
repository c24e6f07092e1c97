//! Circle overlap geometry for transit photometry
//!
//! Closed-form area of intersection for a transiting body against the
//! stellar disk and for two arbitrary disks, vectorized over arrays of
//! sample positions. Each sample falls into exactly one of three cases:
//! no overlap, complete overlap, or a partial-overlap lens built from two
//! circular segments.

use ndarray::Array1;
use std::f64::consts::PI;

/// Overlap area between the stellar disk and one body at center distance `d`.
///
/// `d = 0` lands in the complete-overlap branch whenever the body fits
/// inside the star. Both arccos arguments are clamped to [-1, 1]: the first
/// overshoots at near-tangency, and clamping the second closes the formula
/// to exactly pi*R^2 when a body larger than the star covers it fully.
fn star_disk_overlap_at(d: f64, r: f64, star_radius: f64) -> f64 {
    let big_r = star_radius;
    if d >= big_r + r {
        return 0.0;
    }
    if d <= big_r - r {
        return PI * r * r;
    }

    let phi_arg = (d * d + r * r - big_r * big_r) / (2.0 * d * r);
    let phi = 2.0 * phi_arg.clamp(-1.0, 1.0).acos();
    let theta_arg = (d * d + big_r * big_r - r * r) / (2.0 * d * big_r);
    let theta = 2.0 * theta_arg.clamp(-1.0, 1.0).acos();

    0.5 * r * r * (phi - phi.sin()) + 0.5 * big_r * big_r * (theta - theta.sin())
}

/// Overlap area between two disks with radii `r1` and `r2` at center distance `d`.
fn disk_disk_overlap_at(d: f64, r1: f64, r2: f64) -> f64 {
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let r_min = r1.min(r2);
        return PI * r_min * r_min;
    }

    let alpha_arg = (d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1);
    let alpha = alpha_arg.clamp(-1.0, 1.0).acos();
    let beta_arg = (d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2);
    let beta = beta_arg.clamp(-1.0, 1.0).acos();

    // Heron-style root; floored at zero against floating-point excursions
    // just inside the tangency boundaries.
    let root =
        ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).max(0.0);

    r1 * r1 * alpha + r2 * r2 * beta - 0.5 * root.sqrt()
}

/// Overlap area between the stellar disk and a transiting body (vectorized)
///
/// # Arguments
/// * `x` - Body center x offsets from the star center, along the transit direction
/// * `y` - Body center y offsets from the star center
/// * `body_radius` - Radius of the transiting body
/// * `star_radius` - Radius of the star
///
/// # Returns
/// Array of overlap areas, same shape as the inputs; zero where the body is
/// off the stellar disk, pi*r^2 where it is fully inside.
pub fn star_disk_overlap(
    x: &Array1<f64>,
    y: &Array1<f64>,
    body_radius: f64,
    star_radius: f64,
) -> Array1<f64> {
    assert_eq!(x.len(), y.len(), "x and y arrays must have same length");

    let mut area = Array1::<f64>::zeros(x.len());
    for i in 0..x.len() {
        let d = (x[i] * x[i] + y[i] * y[i]).sqrt();
        area[i] = star_disk_overlap_at(d, body_radius, star_radius);
    }
    area
}

/// Overlap area between two disks (vectorized)
///
/// Symmetric in its two bodies: swapping `(x1, y1, r1)` with `(x2, y2, r2)`
/// leaves the result unchanged.
///
/// # Arguments
/// * `x1`, `y1` - Center coordinates of the first disk per sample
/// * `r1` - Radius of the first disk
/// * `x2`, `y2` - Center coordinates of the second disk per sample
/// * `r2` - Radius of the second disk
///
/// # Returns
/// Array of overlap areas, same shape as the inputs.
pub fn disk_disk_overlap(
    x1: &Array1<f64>,
    y1: &Array1<f64>,
    r1: f64,
    x2: &Array1<f64>,
    y2: &Array1<f64>,
    r2: f64,
) -> Array1<f64> {
    assert_eq!(x1.len(), y1.len(), "x1 and y1 arrays must have same length");
    assert_eq!(x1.len(), x2.len(), "disk coordinate arrays must have same length");
    assert_eq!(x2.len(), y2.len(), "x2 and y2 arrays must have same length");

    let mut area = Array1::<f64>::zeros(x1.len());
    for i in 0..x1.len() {
        let dx = x1[i] - x2[i];
        let dy = y1[i] - y2[i];
        let d = (dx * dx + dy * dy).sqrt();
        area[i] = disk_disk_overlap_at(d, r1, r2);
    }
    area
}
