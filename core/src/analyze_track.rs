use crate::metrics::{elevation_stats, readings_rejected_total, readings_total, Metrics};
use crate::models::Reading;
use crate::smoothing::ElevationFilter;
use crate::types::{FilterConfig, SmoothingReport};

/// Glatter en hel høydeserie med ett ferskt filter (én økt).
/// Returnerer den glattede serien og antall forkastede avlesninger.
pub fn smooth_series(
    readings: &[Reading],
    cfg: &FilterConfig,
    metrics: &Metrics,
) -> (Vec<f64>, usize) {
    let mut filter = ElevationFilter::with_config(cfg.clone());
    let mut smoothed = Vec::with_capacity(readings.len());
    let mut rejected = 0usize;

    for r in readings {
        let outcome = filter.add_reading_outcome(r.elevation_m, r.vertical_accuracy_m);
        readings_total(metrics).inc();
        if outcome.rejected {
            rejected += 1;
            readings_rejected_total(metrics).inc();
        }
        smoothed.push(outcome.smoothed_m);
    }

    (smoothed, rejected)
}

/// Kjører serien gjennom filteret og sammenligner rå mot glattet.
pub fn analyze_track(
    readings: &[Reading],
    cfg: &FilterConfig,
    metrics: &Metrics,
) -> Result<SmoothingReport, String> {
    let raw_values: Vec<f64> = readings.iter().map(|r| r.elevation_m).collect();
    let raw = elevation_stats(&raw_values).ok_or_else(|| "no_elevation_stream".to_string())?;

    let (smoothed_values, rejected) = smooth_series(readings, cfg, metrics);
    let smoothed =
        elevation_stats(&smoothed_values).ok_or_else(|| "no_elevation_stream".to_string())?;

    let std_dev_reduction_m = raw.std_dev_m - smoothed.std_dev_m;
    let std_dev_reduction_pct = if raw.std_dev_m > 0.0 {
        (1.0 - smoothed.std_dev_m / raw.std_dev_m) * 100.0
    } else {
        0.0
    };
    let range_reduction_m = raw.range_m - smoothed.range_m;
    let range_reduction_pct = if raw.range_m > 0.0 {
        (1.0 - smoothed.range_m / raw.range_m) * 100.0
    } else {
        0.0
    };

    Ok(SmoothingReport {
        total_points: readings.len(),
        rejected_points: rejected,
        raw,
        smoothed,
        std_dev_reduction_m,
        std_dev_reduction_pct,
        range_reduction_m,
        range_reduction_pct,
    })
}

/// Streng-inn/streng-ut-variant for bro-kallere (Python m.fl.).
/// `samples_json` er en liste av Reading-objekter, `cfg_json` en
/// valgfri FilterConfig (delvis utfylt er greit, resten får default).
pub fn analyze_track_json(samples_json: &str, cfg_json: Option<&str>) -> Result<String, String> {
    let readings: Vec<Reading> =
        serde_json::from_str(samples_json).map_err(|e| format!("bad_samples_json: {}", e))?;

    let cfg: FilterConfig = match cfg_json {
        Some(s) => serde_json::from_str(s).map_err(|e| format!("bad_cfg_json: {}", e))?,
        None => FilterConfig::default(),
    };
    cfg.validate().map_err(|e| e.to_string())?;

    let report = analyze_track(&readings, &cfg, crate::metrics::global())?;
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
