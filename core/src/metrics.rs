// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

use crate::types::ElevationStats;

/// Beskrivende statistikk for en høydeserie. None hvis serien er tom.
/// Standardavviket er populasjonsvarianten (delt på n).
pub fn elevation_stats(elevations: &[f64]) -> Option<ElevationStats> {
    if elevations.is_empty() {
        return None;
    }

    let n = elevations.len() as f64;
    let mean = elevations.iter().sum::<f64>() / n;
    let variance = elevations.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;

    let min = elevations.iter().copied().fold(f64::INFINITY, f64::min);
    let max = elevations.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(ElevationStats {
        mean_m: mean,
        std_dev_m: variance.sqrt(),
        min_m: min,
        max_m: max,
        range_m: max - min,
    })
}

/// Tellere for seriebehandlingen. Selve filteret rører aldri metrikker –
/// tellingen skjer i analyse-laget, så kjernen forblir en ren tilstandsmaskin.
pub struct Metrics {
    registry: Registry,
    readings_total: IntCounter,
    readings_rejected_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let readings_total = IntCounter::new(
            "elevation_readings_total",
            "Antall høydeavlesninger prosessert",
        )
        .unwrap();
        let readings_rejected_total = IntCounter::new(
            "elevation_readings_rejected_total",
            "Antall avlesninger forkastet av portvakten",
        )
        .unwrap();

        registry.register(Box::new(readings_total.clone())).unwrap();
        registry
            .register(Box::new(readings_rejected_total.clone()))
            .unwrap();

        Self {
            registry,
            readings_total,
            readings_rejected_total,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn readings_total(metrics: &Metrics) -> &IntCounter {
    &metrics.readings_total
}

pub fn readings_rejected_total(metrics: &Metrics) -> &IntCounter {
    &metrics.readings_rejected_total
}

static GLOBAL: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Prosessglobal instans for kallere uten eget register (f.eks. Python-broen).
pub fn global() -> &'static Metrics {
    &GLOBAL
}
