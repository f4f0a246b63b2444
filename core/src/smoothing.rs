// core/src/smoothing.rs
use crate::alpha::adaptive_alpha;
use crate::spike::estimate_accuracy;
use crate::types::FilterConfig;
use crate::window::SlidingWindow;

/// Rå-vinduet for mønsteranalyse er bevisst kort: langt nok til å se en
/// spike snu, kort nok til at filteret reagerer på ekte terrengskifte.
pub const RAW_WINDOW_LEN: usize = 4;

/// Resultatet av én avlesning gjennom filteret.
#[derive(Debug, Clone, Copy)]
pub struct ReadingOutcome {
    pub smoothed_m: f64,
    /// Nøyaktigheten som faktisk ble brukt i portvakten (ekstern eller estimert).
    pub accuracy_m: f64,
    pub alpha: f64,
    pub rejected: bool,
}

/// Tilstandsfullt høydefilter: mønsterbasert spike-deteksjon + adaptiv
/// EMA-glatting. Ett filter per spor/økt – del aldri en instans mellom
/// samtidige økter.
#[derive(Debug, Clone)]
pub struct ElevationFilter {
    cfg: FilterConfig,
    previous_smoothed: Option<f64>,
    raw_window: SlidingWindow<f64>,
    accepted_window: SlidingWindow<f64>,
}

impl ElevationFilter {
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    pub fn with_config(cfg: FilterConfig) -> Self {
        let accepted_window = SlidingWindow::new(cfg.trend_window);
        Self {
            cfg,
            previous_smoothed: None,
            raw_window: SlidingWindow::new(RAW_WINDOW_LEN),
            accepted_window,
        }
    }

    /// Prosesserer én avlesning og returnerer glattet høyde (m).
    /// Kalles i kronologisk rekkefølge, én gang per GPS-fix.
    pub fn add_reading(&mut self, elevation_m: f64, vertical_accuracy_m: Option<f64>) -> f64 {
        self.add_reading_outcome(elevation_m, vertical_accuracy_m)
            .smoothed_m
    }

    /// Som `add_reading`, men med portvakt-detaljene for rapportering.
    pub fn add_reading_outcome(
        &mut self,
        elevation_m: f64,
        vertical_accuracy_m: Option<f64>,
    ) -> ReadingOutcome {
        // Råvinduet oppdateres alltid, også når avlesningen senere
        // forkastes – en spike skal være synlig for de neste avlesningene.
        self.raw_window.push(elevation_m);

        let estimated = estimate_accuracy(&self.raw_window, self.cfg.spike_reversal_threshold);

        // Ekstern nøyaktighet vinner når den finnes og er gyldig
        let accuracy_m = match vertical_accuracy_m {
            Some(a) if a >= 0.0 => a,
            _ => estimated,
        };

        let mut to_smooth = elevation_m;
        let mut rejected = false;
        if accuracy_m > self.cfg.vertical_accuracy_threshold {
            // Dårlig nøyaktighet: gjenta forrige glattede verdi hvis vi har en.
            // Aller første avlesning kan ikke erstattes og brukes som den er.
            if let Some(prev) = self.previous_smoothed {
                to_smooth = prev;
                rejected = true;
                log::debug!(
                    "forkastet høyde {:.1} m (accuracy {:.1} > terskel {:.1})",
                    elevation_m,
                    accuracy_m,
                    self.cfg.vertical_accuracy_threshold
                );
            }
        }

        // Bare verdier vi faktisk stoler på får påvirke trendvurderingen
        if !rejected {
            self.accepted_window.push(to_smooth);
        }

        let alpha = adaptive_alpha(&self.accepted_window, self.cfg.alpha_min, self.cfg.alpha_max);

        let smoothed_m = match self.previous_smoothed {
            Some(prev) => alpha * to_smooth + (1.0 - alpha) * prev,
            None => to_smooth,
        };
        self.previous_smoothed = Some(smoothed_m);

        ReadingOutcome {
            smoothed_m,
            accuracy_m,
            alpha,
            rejected,
        }
    }

    /// Nullstiller filteret foran et nytt, uavhengig segment slik at
    /// gammel trend-/spikehistorikk ikke lekker over. Bufferne beholder
    /// allokert kapasitet.
    pub fn reset(&mut self) {
        self.previous_smoothed = None;
        self.raw_window.clear();
        self.accepted_window.clear();
    }

    /// Siste glattede verdi; None før første avlesning.
    pub fn previous_smoothed(&self) -> Option<f64> {
        self.previous_smoothed
    }

    pub fn config(&self) -> &FilterConfig {
        &self.cfg
    }
}

impl Default for ElevationFilter {
    fn default() -> Self {
        Self::new()
    }
}
