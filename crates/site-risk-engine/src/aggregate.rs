//! Overall risk aggregation
//!
//! score = weighted mean of available layer risks (low 0, medium 1, high 2)
//!       + flat penalty per conflict, without cap.
//! The band is recomputed from layers and conflicts on every call.

use crate::config::{RiskConfig, ScoreThresholds};
use crate::conflicts::detect_conflicts;
use crate::layers::normalize_layers;
use crate::raw::RawGisResult;
use shared_types::{AggregatedResult, ConflictWarning, GeoLayerResult, LayerColor, RiskLevel};
use tracing::debug;

/// Weighted layer average plus conflict penalties
pub fn risk_score(
    layers: &[GeoLayerResult],
    conflicts: &[ConflictWarning],
    config: &RiskConfig,
) -> f64 {
    let (weighted, total_weight) = layers
        .iter()
        .filter(|layer| layer.available)
        .map(|layer| (config.weights.weight(layer.id), layer.risk.value()))
        .fold((0.0, 0.0), |(sum, total), (weight, value)| {
            (sum + weight * value, total + weight)
        });

    let average = if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    };

    let penalty: f64 = conflicts
        .iter()
        .map(|conflict| config.penalties.penalty(conflict.severity))
        .sum();

    average + penalty
}

/// Map a score to its band
pub fn risk_band(score: f64, thresholds: &ScoreThresholds) -> RiskLevel {
    if score < thresholds.medium {
        RiskLevel::Low
    } else if score < thresholds.high {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Display label of an overall band
pub fn risk_band_label(band: RiskLevel) -> &'static str {
    match band {
        RiskLevel::Low => "Geringes Risiko",
        RiskLevel::Medium => "Mittleres Risiko",
        RiskLevel::High => "Hohes Risiko",
    }
}

/// Overall score, band, color and label for a layer and conflict set
pub fn overall_risk(
    layers: &[GeoLayerResult],
    conflicts: &[ConflictWarning],
    config: &RiskConfig,
) -> (f64, RiskLevel, LayerColor, &'static str) {
    let score = risk_score(layers, conflicts, config);
    let band = risk_band(score, &config.thresholds);
    (score, band, band.color(), risk_band_label(band))
}

/// Aggregate a raw lookup result with the default configuration
pub fn aggregate_risk(raw: &RawGisResult) -> AggregatedResult {
    aggregate_risk_with(raw, &RiskConfig::default())
}

/// Aggregate a raw lookup result
pub fn aggregate_risk_with(raw: &RawGisResult, config: &RiskConfig) -> AggregatedResult {
    let layers = normalize_layers(raw, config);
    let conflicts = detect_conflicts(&layers, &config.conflicts);
    let (score, overall_risk, overall_color, label) = overall_risk(&layers, &conflicts, config);

    debug!(
        score,
        band = ?overall_risk,
        conflicts = conflicts.len(),
        available = layers.iter().filter(|l| l.available).count(),
        "aggregated site risk"
    );

    AggregatedResult {
        address: raw.address.clone(),
        overall_risk,
        overall_color,
        overall_label: label.to_string(),
        score,
        conflicts,
        layers,
        pois: raw.pois.clone(),
    }
}
