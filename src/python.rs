//! Python bindings for the transit engine
//!
//! Exposes the simulate/diagram entry points and both overlap functions to
//! the dashboard layer. Keyword defaults mirror [`SystemConfig::default`];
//! validation failures surface as `ValueError`.

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::SystemConfig;
use crate::diagram;
use crate::geometry;
use crate::transit;

#[pyfunction]
#[pyo3(signature = (
    star_radius=1.0,
    star_intensity=1.0,
    planet_radius=0.1,
    planet_distance=0.5,
    transit_duration=4.0,
    moon_radius=0.03,
    moon_distance=0.2,
    moon_orbital_period=24.0,
    moon_initial_phase=0.0,
    moon_orbital_inclination=0.0,
    include_moon=true,
    num_points=1000
))]
#[allow(clippy::too_many_arguments)]
fn simulate_light_curve<'py>(
    py: Python<'py>,
    star_radius: f64,
    star_intensity: f64,
    planet_radius: f64,
    planet_distance: f64,
    transit_duration: f64,
    moon_radius: f64,
    moon_distance: f64,
    moon_orbital_period: f64,
    moon_initial_phase: f64,
    moon_orbital_inclination: f64,
    include_moon: bool,
    num_points: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let config = SystemConfig {
        star_radius,
        star_intensity,
        planet_radius,
        planet_distance,
        transit_duration,
        moon_radius,
        moon_distance,
        moon_orbital_period,
        moon_initial_phase,
        moon_orbital_inclination,
        include_moon,
    };
    let curve = transit::simulate_light_curve(&config, num_points)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    Ok((curve.time.into_pyarray(py), curve.flux.into_pyarray(py)))
}

#[pyfunction]
#[pyo3(signature = (
    star_radius=1.0,
    planet_radius=0.1,
    planet_distance=0.5,
    moon_radius=0.03,
    moon_distance=0.2,
    moon_initial_phase=0.0,
    moon_orbital_inclination=0.0,
    include_moon=true,
    time_fraction=0.0
))]
#[allow(clippy::too_many_arguments)]
fn orbital_diagram(
    star_radius: f64,
    planet_radius: f64,
    planet_distance: f64,
    moon_radius: f64,
    moon_distance: f64,
    moon_initial_phase: f64,
    moon_orbital_inclination: f64,
    include_moon: bool,
    time_fraction: f64,
) -> PyResult<String> {
    let config = SystemConfig {
        star_radius,
        planet_radius,
        planet_distance,
        moon_radius,
        moon_distance,
        moon_initial_phase,
        moon_orbital_inclination,
        include_moon,
        ..Default::default()
    };
    diagram::orbital_diagram(&config, time_fraction)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn star_disk_overlap<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    body_radius: f64,
    star_radius: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x = x.as_array().to_owned();
    let y = y.as_array().to_owned();
    if x.len() != y.len() {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "x and y arrays must have the same length",
        ));
    }
    Ok(geometry::star_disk_overlap(&x, &y, body_radius, star_radius).into_pyarray(py))
}

#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn disk_disk_overlap<'py>(
    py: Python<'py>,
    x1: PyReadonlyArray1<'py, f64>,
    y1: PyReadonlyArray1<'py, f64>,
    r1: f64,
    x2: PyReadonlyArray1<'py, f64>,
    y2: PyReadonlyArray1<'py, f64>,
    r2: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let x1 = x1.as_array().to_owned();
    let y1 = y1.as_array().to_owned();
    let x2 = x2.as_array().to_owned();
    let y2 = y2.as_array().to_owned();
    if x1.len() != y1.len() || x1.len() != x2.len() || x2.len() != y2.len() {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "coordinate arrays must have the same length",
        ));
    }
    Ok(geometry::disk_disk_overlap(&x1, &y1, r1, &x2, &y2, r2).into_pyarray(py))
}

#[pymodule]
fn _exomoon_sim(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_light_curve, m)?)?;
    m.add_function(wrap_pyfunction!(orbital_diagram, m)?)?;
    m.add_function(wrap_pyfunction!(star_disk_overlap, m)?)?;
    m.add_function(wrap_pyfunction!(disk_disk_overlap, m)?)?;
    Ok(())
}
