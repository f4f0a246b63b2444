// core/src/alpha.rs
use crate::window::SlidingWindow;

/// Minste antall aksepterte punkter før en trend i det hele tatt vurderes.
pub const TREND_MIN_POINTS: usize = 3;
/// Snittendring (m) som gir fullt magnitude-bidrag.
pub const MAGNITUDE_FULL_BOOST_M: f64 = 2.0;

/// Adaptiv glattingskoeffisient ut fra trenden i aksepterte høyder.
/// Sterk, konsistent trend med store endringer => høy alpha (mindre
/// demping, ekte stigning/fall henger ikke etter). Flatt eller støyete
/// => alpha_min.
///
/// Resultatet ligger alltid i [alpha_min, alpha_max].
pub fn adaptive_alpha(accepted: &SlidingWindow<f64>, alpha_min: f64, alpha_max: f64) -> f64 {
    if accepted.len() < TREND_MIN_POINTS {
        return alpha_min;
    }

    let deltas = accepted.deltas();

    let pos = deltas.iter().filter(|d| **d > 0.0).count();
    let neg = deltas.iter().filter(|d| **d < 0.0).count();
    let total_non_zero = pos + neg;
    if total_non_zero == 0 {
        // ingen retning – flatt eller ren støy
        return alpha_min;
    }

    // Andel av ikke-null endringer som er enige om retningen, (0, 1]
    let trend_strength = pos.max(neg) as f64 / total_non_zero as f64;

    // Store endringer = sterkere trend (nuller teller med i snittet)
    let avg_magnitude = deltas.iter().map(|d| d.abs()).sum::<f64>() / deltas.len() as f64;
    let magnitude_boost = (avg_magnitude / MAGNITUDE_FULL_BOOST_M).min(1.0);

    let combined = (trend_strength + magnitude_boost) / 2.0;
    (alpha_min + combined * (alpha_max - alpha_min)).clamp(alpha_min, alpha_max)
}
