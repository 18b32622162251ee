// Umgebungslärm layer (Lden, dB(A))
use super::{risk_label, unavailable};
use crate::config::NoiseBands;
use crate::raw::NoiseLookup;
use crate::zoning_code::NOT_AVAILABLE;
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId, RiskLevel};

/// Band a noise level
pub fn noise_risk(level_db: f64, bands: &NoiseBands) -> RiskLevel {
    if level_db >= bands.high_db {
        RiskLevel::High
    } else if level_db >= bands.medium_db {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn normalize_noise(lookup: Option<&NoiseLookup>, bands: &NoiseBands) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::Noise);
    };
    let Some(level_db) = lookup.level_db.filter(|l| l.is_finite()) else {
        return unavailable(LayerId::Noise);
    };

    let risk = noise_risk(level_db, bands);
    let facts = vec![
        Fact::new("Lärmpegel (Lden)", format!("{:.1} dB(A)", level_db)),
        Fact::new("Lärmquelle", lookup.source.as_deref().unwrap_or(NOT_AVAILABLE)),
        Fact::new("Belastung", risk_label(risk)).with_note(format!(
            "ab {:.0} dB(A) mittel, ab {:.0} dB(A) hoch",
            bands.medium_db, bands.high_db
        )),
    ];

    GeoLayerResult::available(
        LayerId::Noise,
        risk,
        facts,
        LayerDetails::Noise {
            level_db: Some(level_db),
        },
    )
    .with_geometry(lookup.geometry.clone())
}
