//! Layer normalization
//!
//! Each geospatial domain turns its raw lookup into the common
//! [`GeoLayerResult`] shape. A lookup that is missing, failed or reported
//! `found = false` becomes the layer's documented default. Missing data is
//! never read as "safe": each layer falls back according to its own risk
//! posture.
//!
//! | layer        | default        |
//! |--------------|----------------|
//! | zoning       | medium / gray  |
//! | noise        | low / green    |
//! | floodRisk    | low / green    |
//! | realnutzung  | medium / gray  |
//! | energyPlan   | medium / yellow|
//! | planDocument | low / gray     |

pub mod energy_plan;
pub mod flood;
pub mod noise;
pub mod plan_document;
pub mod realnutzung;
pub mod zoning;

pub use energy_plan::normalize_energy_plan;
pub use flood::normalize_flood;
pub use noise::normalize_noise;
pub use plan_document::normalize_plan_document;
pub use realnutzung::normalize_realnutzung;
pub use zoning::normalize_zoning;

use crate::config::RiskConfig;
use crate::raw::RawGisResult;
use shared_types::{GeoLayerResult, LayerColor, LayerId, RiskLevel};

/// Default risk and color of a layer without data
pub fn layer_default(id: LayerId) -> (RiskLevel, LayerColor) {
    match id {
        LayerId::Zoning => (RiskLevel::Medium, LayerColor::Gray),
        LayerId::Noise => (RiskLevel::Low, LayerColor::Green),
        LayerId::FloodRisk => (RiskLevel::Low, LayerColor::Green),
        LayerId::Realnutzung => (RiskLevel::Medium, LayerColor::Gray),
        LayerId::EnergyPlan => (RiskLevel::Medium, LayerColor::Yellow),
        LayerId::PlanDocument => (RiskLevel::Low, LayerColor::Gray),
    }
}

/// Unavailable stub carrying the layer default
pub fn unavailable(id: LayerId) -> GeoLayerResult {
    let (risk, color) = layer_default(id);
    GeoLayerResult::unavailable(id, risk, color)
}

/// Normalize every layer of a raw result, in display order
pub fn normalize_layers(raw: &RawGisResult, config: &RiskConfig) -> Vec<GeoLayerResult> {
    vec![
        normalize_zoning(raw.zoning.as_ref()),
        normalize_noise(raw.noise.as_ref(), &config.noise),
        normalize_flood(raw.flood.as_ref()),
        normalize_realnutzung(raw.realnutzung.as_ref()),
        normalize_energy_plan(raw.energy_plan.as_ref()),
        normalize_plan_document(raw.plan_document.as_ref()),
    ]
}

pub(crate) fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "gering",
        RiskLevel::Medium => "mittel",
        RiskLevel::High => "hoch",
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "ja"
    } else {
        "nein"
    }
}
