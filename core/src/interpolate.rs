// core/src/interpolate.rs
use chrono::Duration;

use crate::models::TrackPoint;

/// Standardintervall mellom interpolerte punkter (sek).
pub const DEFAULT_INTERVAL_S: i64 = 10;

/// Lineær tidsinterpolasjon av et sporsegment: fyller på med punkter
/// slik at det står ett punkt per `interval` der originalpunktene
/// ligger lengre fra hverandre. Originalpunktene beholdes som de er.
///
/// Par der tidsstempel mangler kopieres urørt gjennom (med warning) –
/// uten tid finnes det ingen akse å interpolere langs.
pub fn interpolate_segment(points: &[TrackPoint], interval: Duration) -> Vec<TrackPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());

    for pair in points.windows(2) {
        let p1 = &pair[0];
        let p2 = &pair[1];

        out.push(p1.clone());

        let (t1, t2) = match (p1.time, p2.time) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                log::warn!(
                    "hopper over interpolasjon: punkt uten tidsstempel ({:.5}/{:.5})",
                    p1.lat,
                    p1.lon
                );
                continue;
            }
        };

        let span = t2 - t1;
        // Tettere enn intervallet (eller ute av rekkefølge): ingenting å fylle
        if span <= interval {
            continue;
        }
        let span_s = span.num_milliseconds() as f64 / 1000.0;

        // Manglende høyde i én ende behandles som 0 i interpolasjonen;
        // resultatet er bare None når begge ender mangler.
        let e1 = p1.elevation_m.unwrap_or(0.0);
        let e2 = p2.elevation_m.unwrap_or(0.0);
        let ele_missing = p1.elevation_m.is_none() && p2.elevation_m.is_none();

        let mut current = t1 + interval;
        while current < t2 {
            let t = (current - t1).num_milliseconds() as f64 / 1000.0 / span_s;
            out.push(TrackPoint {
                lat: p1.lat + (p2.lat - p1.lat) * t,
                lon: p1.lon + (p2.lon - p1.lon) * t,
                elevation_m: if ele_missing {
                    None
                } else {
                    Some(e1 + (e2 - e1) * t)
                },
                time: Some(current),
            });
            current = current + interval;
        }
    }

    // Aller siste originalpunkt avslutter segmentet
    out.push(points[points.len() - 1].clone());

    out
}
