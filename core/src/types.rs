use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filterkonfigurasjon. Uforanderlig for levetiden til et filter;
/// alle felt kan overstyres enkeltvis ved konstruksjon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Avlesninger med nøyaktighet strengt over denne forkastes (m).
    pub vertical_accuracy_threshold: f64,
    pub alpha_min: f64,
    pub alpha_max: f64,
    /// Antall aksepterte høyder trendvurderingen ser på.
    pub trend_window: usize,
    /// Minste endring (m) som regnes som stor i reversal-testen.
    pub spike_reversal_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            vertical_accuracy_threshold: 20.0,
            alpha_min: 0.25,
            alpha_max: 0.75,
            trend_window: 5,
            spike_reversal_threshold: 3.0,
        }
    }
}

impl FilterConfig {
    /// Avviser profiler som ikke gir et meningsfullt filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for a in [self.alpha_min, self.alpha_max] {
            if !a.is_finite() || !(0.0..=1.0).contains(&a) {
                return Err(ConfigError::AlphaBounds(a));
            }
        }
        if self.alpha_min > self.alpha_max {
            return Err(ConfigError::AlphaRange {
                min: self.alpha_min,
                max: self.alpha_max,
            });
        }
        if self.trend_window < 2 {
            return Err(ConfigError::TrendWindow(self.trend_window));
        }
        for t in [
            self.vertical_accuracy_threshold,
            self.spike_reversal_threshold,
        ] {
            if !t.is_finite() || t <= 0.0 {
                return Err(ConfigError::Threshold(t));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alpha må ligge i [0, 1], fikk {0}")]
    AlphaBounds(f64),
    #[error("alpha_min ({min}) kan ikke være større enn alpha_max ({max})")]
    AlphaRange { min: f64, max: f64 },
    #[error("trend_window må være minst 2, fikk {0}")]
    TrendWindow(usize),
    #[error("terskler må være endelige og positive, fikk {0}")]
    Threshold(f64),
}

/// Beskrivende statistikk for en høydeserie (meter).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ElevationStats {
    pub mean_m: f64,
    pub std_dev_m: f64,
    pub min_m: f64,
    pub max_m: f64,
    pub range_m: f64,
}

/// Rå mot glattet serie, med forbedringstall for rapportering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmoothingReport {
    pub total_points: usize,
    pub rejected_points: usize,
    pub raw: ElevationStats,
    pub smoothed: ElevationStats,
    pub std_dev_reduction_m: f64,
    pub std_dev_reduction_pct: f64,
    pub range_reduction_m: f64,
    pub range_reduction_pct: f64,
}
