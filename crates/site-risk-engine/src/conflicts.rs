//! Cross-layer contradiction checks
//!
//! Four fixed checks, all evaluated on every call. Only available layers
//! carry details, so a missing layer can never trigger a conflict.

use crate::config::ConflictThresholds;
use crate::sensitivity::{
    contains_any, COMMERCIAL_KEYWORDS, INDUSTRIAL_KEYWORDS, RESIDENTIAL_KEYWORDS,
};
use crate::zoning_code::{is_industrial, is_residential};
use shared_types::{ConflictWarning, GeoLayerResult, LayerDetails, LayerId, Severity};

fn details(layers: &[GeoLayerResult], id: LayerId) -> Option<&LayerDetails> {
    layers
        .iter()
        .find(|layer| layer.id == id && layer.available)
        .and_then(|layer| layer.details.as_ref())
}

/// Detect contradictions between normalized layers
pub fn detect_conflicts(
    layers: &[GeoLayerResult],
    thresholds: &ConflictThresholds,
) -> Vec<ConflictWarning> {
    let mut conflicts = Vec::new();

    let zoning_base = match details(layers, LayerId::Zoning) {
        Some(LayerDetails::Zoning { base_code, .. }) => Some(base_code.as_str()),
        _ => None,
    };
    let usage = match details(layers, LayerId::Realnutzung) {
        Some(LayerDetails::Realnutzung { usage }) => Some(usage.to_lowercase()),
        _ => None,
    };
    let in_flood_zone = matches!(
        details(layers, LayerId::FloodRisk),
        Some(LayerDetails::FloodRisk { in_flood_zone: true })
    );
    let noise_level = match details(layers, LayerId::Noise) {
        Some(LayerDetails::Noise { level_db }) => *level_db,
        _ => None,
    };

    let Some(base) = zoning_base else {
        return conflicts;
    };
    let residential = is_residential(base);

    if let Some(usage) = &usage {
        if is_industrial(base) && contains_any(usage, RESIDENTIAL_KEYWORDS) {
            conflicts.push(ConflictWarning {
                description: "Industrie-/Betriebsbaugebiet gewidmet, tatsächlich aber Wohnnutzung. \
                              Nachbarschaftsschutz kann strenger ausfallen als die Widmung vermuten lässt."
                    .to_string(),
                layers: [LayerId::Zoning, LayerId::Realnutzung],
                severity: Severity::Critical,
            });
        }

        let commercial_use = contains_any(usage, INDUSTRIAL_KEYWORDS)
            || contains_any(usage, COMMERCIAL_KEYWORDS);
        if residential && commercial_use {
            conflicts.push(ConflictWarning {
                description: "Wohngebiet gewidmet, tatsächlich aber gewerbliche oder industrielle \
                              Nutzung. Bestandsschutz und Widmung prüfen."
                    .to_string(),
                layers: [LayerId::Zoning, LayerId::Realnutzung],
                severity: Severity::Warning,
            });
        }
    }

    if in_flood_zone && residential {
        conflicts.push(ConflictWarning {
            description: "Wohngebiet im Hochwasserabflussgebiet.".to_string(),
            layers: [LayerId::FloodRisk, LayerId::Zoning],
            severity: Severity::Warning,
        });
    }

    if let Some(level) = noise_level {
        if level >= thresholds.noise_db && residential {
            conflicts.push(ConflictWarning {
                description: format!(
                    "Lärmbelastung von {:.1} dB(A) in einem Wohngebiet.",
                    level
                ),
                layers: [LayerId::Noise, LayerId::Zoning],
                severity: Severity::Warning,
            });
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Fact, RiskLevel};

    fn zoning(base: &str) -> GeoLayerResult {
        GeoLayerResult::available(
            LayerId::Zoning,
            RiskLevel::Low,
            vec![Fact::new("Widmung", base)],
            LayerDetails::Zoning {
                code: base.to_string(),
                base_code: base.to_string(),
                is_boundary: false,
            },
        )
    }

    fn usage(text: &str) -> GeoLayerResult {
        GeoLayerResult::available(
            LayerId::Realnutzung,
            RiskLevel::Medium,
            Vec::new(),
            LayerDetails::Realnutzung {
                usage: text.to_string(),
            },
        )
    }

    fn noise(level: f64) -> GeoLayerResult {
        GeoLayerResult::available(
            LayerId::Noise,
            RiskLevel::High,
            Vec::new(),
            LayerDetails::Noise {
                level_db: Some(level),
            },
        )
    }

    fn flood(in_zone: bool) -> GeoLayerResult {
        GeoLayerResult::available(
            LayerId::FloodRisk,
            RiskLevel::High,
            Vec::new(),
            LayerDetails::FloodRisk {
                in_flood_zone: in_zone,
            },
        )
    }

    fn detect(layers: &[GeoLayerResult]) -> Vec<ConflictWarning> {
        detect_conflicts(layers, &ConflictThresholds::default())
    }

    #[test]
    fn test_industrial_zoning_with_residential_use_is_critical() {
        let conflicts = detect(&[zoning("IG"), usage("Wohnhausanlage")]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Critical);
        assert_eq!(conflicts[0].layers, [LayerId::Zoning, LayerId::Realnutzung]);

        let conflicts = detect(&[zoning("BB"), usage("Wohngebiet")]);
        assert_eq!(conflicts[0].severity, Severity::Critical);
    }

    #[test]
    fn test_residential_zoning_with_commercial_use_is_warning() {
        let conflicts = detect(&[zoning("W"), usage("Gewerbe und Lager")]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Warning);
    }

    #[test]
    fn test_residential_zoning_with_trade_use_is_warning() {
        let conflicts = detect(&[zoning("W"), usage("Handel und Geschäftsnutzung")]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, Severity::Warning);
        assert_eq!(conflicts[0].layers, [LayerId::Zoning, LayerId::Realnutzung]);

        assert_eq!(detect(&[zoning("GS"), usage("Bürogebäude")]).len(), 1);
        assert!(detect(&[zoning("GB"), usage("Handel")]).is_empty());
    }

    #[test]
    fn test_flood_zone_in_residential_area() {
        let conflicts = detect(&[zoning("W"), flood(true)]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].layers, [LayerId::FloodRisk, LayerId::Zoning]);
        assert!(detect(&[zoning("W"), flood(false)]).is_empty());
        assert!(detect(&[zoning("GB"), flood(true)]).is_empty());
    }

    #[test]
    fn test_noise_threshold_is_inclusive() {
        let conflicts = detect(&[zoning("W"), noise(65.0)]);
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].description.contains("65.0 dB(A)"));
        assert!(detect(&[zoning("W"), noise(64.9)]).is_empty());
    }

    #[test]
    fn test_checks_accumulate() {
        let conflicts = detect(&[
            zoning("W"),
            usage("Industrie"),
            flood(true),
            noise(70.0),
        ]);
        let severities: Vec<_> = conflicts.iter().map(|c| c.severity).collect();
        assert_eq!(severities, vec![Severity::Warning; 3]);
    }

    #[test]
    fn test_layer_order_does_not_matter() {
        let forward = detect(&[zoning("W"), noise(66.0), flood(true)]);
        let reverse = detect(&[flood(true), noise(66.0), zoning("W")]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_unavailable_zoning_never_conflicts() {
        let mut layer = zoning("W");
        layer.available = false;
        assert!(detect(&[layer, noise(80.0), flood(true)]).is_empty());
    }
}
