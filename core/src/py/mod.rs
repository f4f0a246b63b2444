// Python-bindingene (feature "python"). Speiler API-et analyseverktøyene
// i Python brukte: én funksjon for ren glatting, én JSON-basert for rapport.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::analyze_track::{analyze_track_json, smooth_series};
use crate::metrics;
use crate::models::Reading;
use crate::types::FilterConfig;

#[pyfunction]
#[pyo3(signature = (
    elevations,
    accuracies = None,
    vertical_accuracy_threshold = 20.0,
    alpha_min = 0.25,
    alpha_max = 0.75,
    trend_window = 5,
    spike_reversal_threshold = 3.0
))]
pub fn smooth_elevation_series(
    elevations: Vec<f64>,
    accuracies: Option<Vec<f64>>,
    vertical_accuracy_threshold: f64,
    alpha_min: f64,
    alpha_max: f64,
    trend_window: usize,
    spike_reversal_threshold: f64,
) -> PyResult<Vec<f64>> {
    if let Some(acc) = &accuracies {
        if acc.len() != elevations.len() {
            return Err(PyValueError::new_err(
                "Høyde- og nøyaktighetslister må ha samme lengde.",
            ));
        }
    }

    let cfg = FilterConfig {
        vertical_accuracy_threshold,
        alpha_min,
        alpha_max,
        trend_window,
        spike_reversal_threshold,
    };
    cfg.validate()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let readings: Vec<Reading> = elevations
        .iter()
        .enumerate()
        .map(|(i, e)| Reading {
            elevation_m: *e,
            vertical_accuracy_m: accuracies.as_ref().map(|a| a[i]),
        })
        .collect();

    let (smoothed, _rejected) = smooth_series(&readings, &cfg, metrics::global());
    Ok(smoothed)
}

/// JSON-inn/JSON-ut: `samples_json` er en liste av readings,
/// `cfg_json` en valgfri (delvis) FilterConfig. Returnerer rapporten
/// som JSON-streng.
#[pyfunction]
#[pyo3(signature = (samples_json, cfg_json = None))]
pub fn analyze_elevation_json(samples_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    analyze_track_json(samples_json, cfg_json).map_err(PyValueError::new_err)
}
