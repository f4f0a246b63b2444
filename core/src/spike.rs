// core/src/spike.rs
use crate::window::SlidingWindow;

// Estimert vertikal nøyaktighet per mønster (meter, større = verre).
// Verdiene sammenlignes mot vertical_accuracy_threshold med strikt `>`,
// så verdi lik terskelen aksepteres.
pub const ACCURACY_WARMUP: f64 = 20.0; // m – konservativt før nok historikk
pub const ACCURACY_SPIKE: f64 = 30.0; // m – reversal-spike
pub const ACCURACY_OSCILLATION: f64 = 25.0; // m – alternerende støy
pub const ACCURACY_JITTER: f64 = 15.0; // m – småskjelv i ro
pub const ACCURACY_GOOD: f64 = 8.0; // m – mønsteret ser legitimt ut

/// Minste antall råpunkter før mønsteranalyse i det hele tatt forsøkes.
pub const MIN_PATTERN_POINTS: usize = 4;
/// Mikro-jitter krever litt mer historikk enn de andre mønstrene.
pub const JITTER_MIN_POINTS: usize = 5;
/// Maks avvik fra vindussnittet som fortsatt regnes som jitter.
pub const JITTER_BAND_M: f64 = 1.0;

/// Estimerer vertikal nøyaktighet ut fra mønsteret i rå-vinduet.
/// Ren funksjon: første mønster som treffer vinner.
///
/// `reversal_threshold` er minste endring (m) som regnes som "stor" i
/// reversal-testen (to store endringer i motsatt retning = én feilmåling).
pub fn estimate_accuracy(raw: &SlidingWindow<f64>, reversal_threshold: f64) -> f64 {
    if raw.len() < MIN_PATTERN_POINTS {
        return ACCURACY_WARMUP;
    }

    let deltas = raw.deltas();

    // Mønster 1: reversal-spike – to siste endringer store, motsatt fortegn
    if deltas.len() >= 2 {
        let last = deltas[deltas.len() - 1];
        let prev = deltas[deltas.len() - 2];
        if last.abs() > reversal_threshold
            && prev.abs() > reversal_threshold
            && last * prev < 0.0
        {
            return ACCURACY_SPIKE;
        }
    }

    // Mønster 2: oscillasjon – tre siste endringer alle ikke-null og
    // strengt alternerende fortegn
    if deltas.len() >= 3 {
        let tail = &deltas[deltas.len() - 3..];
        let s: Vec<i8> = tail
            .iter()
            .map(|d| {
                if *d > 0.0 {
                    1
                } else if *d < 0.0 {
                    -1
                } else {
                    0
                }
            })
            .collect();
        if s[0] != 0 && s[1] != 0 && s[2] != 0 && s[0] != s[1] && s[1] != s[2] {
            return ACCURACY_OSCILLATION;
        }
    }

    // Mønster 3: mikro-jitter – alle punkter tett rundt vindussnittet
    if raw.len() >= JITTER_MIN_POINTS {
        let mean = raw.values().sum::<f64>() / raw.len() as f64;
        let max_dev = raw.values().map(|v| (v - mean).abs()).fold(0.0, f64::max);
        if max_dev < JITTER_BAND_M {
            return ACCURACY_JITTER;
        }
    }

    ACCURACY_GOOD
}
