pub mod alpha;
pub mod analyze_track;
pub mod cli;
pub mod interpolate;
pub mod metrics;
pub mod models;
pub mod smoothing;
pub mod spike;
pub mod storage;
pub mod types;
pub mod window;

#[cfg(feature = "python")]
pub mod py;

pub use analyze_track::{analyze_track, analyze_track_json, smooth_series};
pub use models::{Reading, TrackPoint};
pub use smoothing::{ElevationFilter, ReadingOutcome};
pub use storage::{load_config, save_config};
pub use types::{ConfigError, ElevationStats, FilterConfig, SmoothingReport};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn altigraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py::smooth_elevation_series, m)?)?;
    m.add_function(wrap_pyfunction!(py::analyze_elevation_json, m)?)?;
    Ok(())
}
