use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Én høydeavlesning fra posisjonssensoren (typisk 1 Hz).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reading {
    pub elevation_m: f64, // meter
    /// Vertikal nøyaktighet fra sensoren (m, større = verre).
    /// None = ingen ekstern verdi; mønsterestimatet brukes i stedet.
    pub vertical_accuracy_m: Option<f64>,
}

impl Reading {
    pub fn new(elevation_m: f64) -> Self {
        Self {
            elevation_m,
            vertical_accuracy_m: None,
        }
    }

    pub fn with_accuracy(elevation_m: f64, vertical_accuracy_m: f64) -> Self {
        Self {
            elevation_m,
            vertical_accuracy_m: Some(vertical_accuracy_m),
        }
    }
}

/// Sporpunkt slik interpolasjonen ser det. Lesing/skriving av selve
/// sporformatet bor utenfor kjernen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64, // grader
    pub lon: f64, // grader
    pub elevation_m: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}
