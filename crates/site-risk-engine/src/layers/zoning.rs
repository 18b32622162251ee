// Flächenwidmung layer
use super::unavailable;
use crate::raw::ZoningLookup;
use crate::zoning_code::{analyze_zoning_code, normalize_code};
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId};

const BOUNDARY_PREFIX: &str = "Grenzlage: ";

pub fn normalize_zoning(lookup: Option<&ZoningLookup>) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::Zoning);
    };
    let Some(raw_code) = lookup.code.as_deref().filter(|c| !c.trim().is_empty()) else {
        return unavailable(LayerId::Zoning);
    };

    let zoning = analyze_zoning_code(raw_code);

    let mut distinct: Vec<String> = vec![zoning.raw.clone()];
    for code in &lookup.codes_in_buffer {
        let code = normalize_code(code);
        if !code.is_empty() && !distinct.contains(&code) {
            distinct.push(code);
        }
    }
    let neighbours = &distinct[1..];
    let is_boundary = !neighbours.is_empty();

    let note = if is_boundary {
        format!("{}{}", BOUNDARY_PREFIX, zoning.note)
    } else {
        zoning.note.clone()
    };

    let mut facts = vec![
        Fact::new("Widmung", format!("{} ({})", zoning.label, zoning.raw)),
        Fact::new("Bauklasse", zoning.bauklasse_label()),
        Fact::new("Bauweise", zoning.bauweise_label()),
        Fact::new("Hinweis", note),
    ];
    if is_boundary {
        facts.push(Fact::new("Angrenzende Widmungen", neighbours.join(", ")));
    }
    if let Some(plan) = &lookup.plan_number {
        facts.push(Fact::new("Plandokument", plan.clone()));
    }

    let details = LayerDetails::Zoning {
        code: zoning.raw.clone(),
        base_code: zoning.base_code.clone(),
        is_boundary,
    };

    GeoLayerResult::available(LayerId::Zoning, zoning.risk, facts, details)
        .with_geometry(lookup.geometry.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{LayerColor, RiskLevel};

    fn lookup(code: &str, buffer: &[&str]) -> ZoningLookup {
        ZoningLookup {
            found: true,
            code: Some(code.to_string()),
            codes_in_buffer: buffer.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_found_zoning_facts() {
        let layer = normalize_zoning(Some(&lookup("BB II g", &["BB II g"])));
        assert!(layer.available);
        assert_eq!(layer.risk, RiskLevel::Low);
        assert_eq!(layer.color, LayerColor::Green);
        assert_eq!(layer.facts[0].value, "Betriebsbaugebiet (BB II g)");
        assert_eq!(layer.facts[1].value, "II");
        assert_eq!(layer.facts[2].value, "geschlossen");
        assert!(!layer.facts[3].value.starts_with(BOUNDARY_PREFIX));
        assert_eq!(
            layer.details,
            Some(LayerDetails::Zoning {
                code: "BB II g".to_string(),
                base_code: "BB".to_string(),
                is_boundary: false,
            })
        );
    }

    #[test]
    fn test_boundary_detection() {
        let layer = normalize_zoning(Some(&lookup("W III o", &["W III o", "GB IV g", "GB IV g"])));
        assert!(layer.facts[3].value.starts_with(BOUNDARY_PREFIX));
        let neighbours = layer.facts.iter().find(|f| f.label == "Angrenzende Widmungen").unwrap();
        assert_eq!(neighbours.value, "GB IV g");
        assert!(matches!(
            layer.details,
            Some(LayerDetails::Zoning { is_boundary: true, .. })
        ));
    }

    #[test]
    fn test_whitespace_variants_are_not_a_boundary() {
        let layer = normalize_zoning(Some(&lookup("W III o", &["W  III  o", " W III o "])));
        assert!(!layer.facts[3].value.starts_with(BOUNDARY_PREFIX));
        assert!(matches!(
            layer.details,
            Some(LayerDetails::Zoning { is_boundary: false, .. })
        ));
        assert_eq!(layer.facts.len(), 4);
    }

    #[test]
    fn test_missing_code_components() {
        let layer = normalize_zoning(Some(&lookup("SN", &[])));
        assert_eq!(layer.facts[1].value, "k.A.");
        assert_eq!(layer.facts[2].value, "k.A.");
    }

    #[test]
    fn test_not_found_is_default() {
        let mut raw = lookup("W", &[]);
        raw.found = false;
        let layer = normalize_zoning(Some(&raw));
        assert!(!layer.available);
        assert_eq!(layer.color, LayerColor::Gray);
        assert!(normalize_zoning(None).facts.is_empty());
    }

    #[test]
    fn test_found_without_code_is_default() {
        let raw = ZoningLookup {
            found: true,
            ..Default::default()
        };
        assert!(!normalize_zoning(Some(&raw)).available);
    }
}
