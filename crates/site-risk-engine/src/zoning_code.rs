//! Zoning code analyzer
//!
//! A code such as "GB III g" is split on whitespace. The first token is the
//! Widmung, classified by case-sensitive prefix against [`ZONING_RULES`]
//! (first match wins, so longer prefixes sit above their shorter stems).
//! The remaining tokens may carry a Bauklasse (roman numeral) and a
//! Bauweise (one or two letters).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::{first_match, RiskLevel, Rule};

lazy_static! {
    /// Bauklasse I to VI
    static ref BAUKLASSE_PATTERN: Regex = Regex::new(r"^(?:VI|V|IV|III|II|I)$").unwrap();
}

/// Shown when a code component is missing
pub const NOT_AVAILABLE: &str = "k.A.";

/// Zoning prefixes where industrial or commercial operation is the norm
pub const INDUSTRIAL_PREFIXES: &[&str] = &["IG", "BB"];

/// Zoning prefixes with residential protection
pub const RESIDENTIAL_PREFIXES: &[&str] = &["W", "GS"];

/// One Widmung category
#[derive(Debug)]
pub struct ZoningRule {
    pub prefix: &'static str,
    pub label: &'static str,
    pub risk: RiskLevel,
    pub note: &'static str,
}

impl Rule<str> for ZoningRule {
    fn matches(&self, base_code: &str) -> bool {
        base_code.starts_with(self.prefix)
    }
}

pub const ZONING_RULES: &[ZoningRule] = &[
    ZoningRule {
        prefix: "WGV",
        label: "Wohngebiet - Geschäftsviertel",
        risk: RiskLevel::Medium,
        note: "Geschäftsnutzung im Erdgeschoß üblich, Nachbarschaftsschutz beachten.",
    },
    ZoningRule {
        prefix: "W",
        label: "Wohngebiet",
        risk: RiskLevel::High,
        note: "Nur Betriebe, die keine Belästigung der Nachbarschaft erwarten lassen.",
    },
    ZoningRule {
        prefix: "GBGV",
        label: "Gemischtes Baugebiet - Geschäftsviertel",
        risk: RiskLevel::Low,
        note: "Geschäfts- und Büronutzung vorgesehen.",
    },
    ZoningRule {
        prefix: "GB",
        label: "Gemischtes Baugebiet",
        risk: RiskLevel::Low,
        note: "Betriebe zulässig, soweit keine unzumutbaren Emissionen entstehen.",
    },
    ZoningRule {
        prefix: "GS",
        label: "Gartensiedlungsgebiet",
        risk: RiskLevel::High,
        note: "Kleingartennutzung, gewerbliche Betriebe in der Regel ausgeschlossen.",
    },
    ZoningRule {
        prefix: "BB",
        label: "Betriebsbaugebiet",
        risk: RiskLevel::Low,
        note: "Für Betriebsanlagen gewidmet.",
    },
    ZoningRule {
        prefix: "IG",
        label: "Industriegebiet",
        risk: RiskLevel::Low,
        note: "Industrielle und gewerbliche Nutzung vorgesehen.",
    },
    ZoningRule {
        prefix: "SWW",
        label: "Schutzgebiet Wald- und Wiesengürtel",
        risk: RiskLevel::High,
        note: "Schutzgebiet, Betriebsanlagen grundsätzlich unzulässig.",
    },
    ZoningRule {
        prefix: "SN",
        label: "Sondernutzungsgebiet",
        risk: RiskLevel::Medium,
        note: "Zulässigkeit richtet sich nach der festgelegten Sondernutzung.",
    },
    ZoningRule {
        prefix: "E",
        label: "Erholungsgebiet",
        risk: RiskLevel::Medium,
        note: "Nur mit dem Erholungszweck vereinbare Nutzungen.",
    },
    ZoningRule {
        prefix: "L",
        label: "Ländliches Gebiet",
        risk: RiskLevel::Medium,
        note: "Land- und forstwirtschaftliche Nutzung vorrangig.",
    },
    ZoningRule {
        prefix: "V",
        label: "Verkehrsband",
        risk: RiskLevel::Medium,
        note: "Verkehrsfläche, Betriebsanlagen nur im Zusammenhang mit dem Verkehr.",
    },
];

const UNKNOWN_LABEL: &str = "Unbekannte Widmung";
const UNKNOWN_NOTE: &str = "Widmung nicht im Katalog, Einzelfallprüfung erforderlich.";

/// Bauweise component of a zoning code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bauweise {
    Geschlossen,
    Offen,
    Gekuppelt,
    Einzeln,
}

impl Bauweise {
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "g" => Some(Bauweise::Geschlossen),
            "o" => Some(Bauweise::Offen),
            "gk" => Some(Bauweise::Gekuppelt),
            "e" => Some(Bauweise::Einzeln),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bauweise::Geschlossen => "geschlossen",
            Bauweise::Offen => "offen",
            Bauweise::Gekuppelt => "gekuppelt",
            Bauweise::Einzeln => "einzeln",
        }
    }
}

/// Decoded zoning code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoningCode {
    pub raw: String,
    pub base_code: String,
    pub label: String,
    pub risk: RiskLevel,
    pub note: String,
    pub bauklasse: Option<String>,
    pub bauweise: Option<Bauweise>,
}

impl ZoningCode {
    pub fn bauklasse_label(&self) -> &str {
        self.bauklasse.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn bauweise_label(&self) -> &str {
        self.bauweise.map_or(NOT_AVAILABLE, Bauweise::label)
    }
}

/// Collapse whitespace runs so equal codes compare equal
pub fn normalize_code(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a raw zoning code string
pub fn analyze_zoning_code(raw: &str) -> ZoningCode {
    let mut tokens = raw.split_whitespace();
    let base_code = tokens.next().unwrap_or_default().to_string();

    let (label, risk, note) = match first_match(ZONING_RULES, base_code.as_str()) {
        Some(rule) => (rule.label, rule.risk, rule.note),
        None => (UNKNOWN_LABEL, RiskLevel::Medium, UNKNOWN_NOTE),
    };

    let mut bauklasse = None;
    let mut bauweise = None;
    for token in tokens {
        if bauklasse.is_none() && BAUKLASSE_PATTERN.is_match(token) {
            bauklasse = Some(token.to_string());
        } else if bauweise.is_none() {
            bauweise = Bauweise::parse_token(token);
        }
    }

    ZoningCode {
        raw: normalize_code(raw),
        base_code,
        label: label.to_string(),
        risk,
        note: note.to_string(),
        bauklasse,
        bauweise,
    }
}

/// Base code starts with one of the given prefixes
pub fn has_prefix(base_code: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| base_code.starts_with(prefix))
}

pub fn is_residential(base_code: &str) -> bool {
    has_prefix(base_code, RESIDENTIAL_PREFIXES)
}

pub fn is_industrial(base_code: &str) -> bool {
    has_prefix(base_code, INDUSTRIAL_PREFIXES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_betriebsbaugebiet_full_code() {
        let code = analyze_zoning_code("BB II g");
        assert_eq!(code.label, "Betriebsbaugebiet");
        assert_eq!(code.risk, RiskLevel::Low);
        assert_eq!(code.bauklasse.as_deref(), Some("II"));
        assert_eq!(code.bauweise_label(), "geschlossen");
    }

    #[test]
    fn test_longer_prefix_listed_first() {
        assert_eq!(analyze_zoning_code("WGV IV g").label, "Wohngebiet - Geschäftsviertel");
        assert_eq!(analyze_zoning_code("W III o").label, "Wohngebiet");
        assert_eq!(
            analyze_zoning_code("GBGV V g").label,
            "Gemischtes Baugebiet - Geschäftsviertel"
        );
        assert_eq!(analyze_zoning_code("GB III").label, "Gemischtes Baugebiet");
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let code = analyze_zoning_code("bb II g");
        assert_eq!(code.label, UNKNOWN_LABEL);
        assert_eq!(code.risk, RiskLevel::Medium);
    }

    #[test]
    fn test_missing_components_report_not_available() {
        let code = analyze_zoning_code("IG");
        assert_eq!(code.label, "Industriegebiet");
        assert_eq!(code.bauklasse_label(), NOT_AVAILABLE);
        assert_eq!(code.bauweise_label(), NOT_AVAILABLE);
    }

    #[test]
    fn test_bauweise_variants() {
        assert_eq!(analyze_zoning_code("W I gk").bauweise, Some(Bauweise::Gekuppelt));
        assert_eq!(analyze_zoning_code("W I o").bauweise, Some(Bauweise::Offen));
        assert_eq!(analyze_zoning_code("W e").bauweise, Some(Bauweise::Einzeln));
        assert_eq!(analyze_zoning_code("W I x").bauweise, None);
    }

    #[test]
    fn test_bauklasse_only_roman_numerals() {
        assert_eq!(analyze_zoning_code("GB VI g").bauklasse.as_deref(), Some("VI"));
        assert_eq!(analyze_zoning_code("GB VII g").bauklasse, None);
        assert_eq!(analyze_zoning_code("GB 3 g").bauklasse, None);
    }

    #[test]
    fn test_empty_code_is_unknown() {
        let code = analyze_zoning_code("   ");
        assert_eq!(code.base_code, "");
        assert_eq!(code.label, UNKNOWN_LABEL);
    }

    #[test]
    fn test_raw_code_is_normalized() {
        assert_eq!(analyze_zoning_code("  W  III\to ").raw, "W III o");
        assert_eq!(normalize_code("GB   IV g"), normalize_code("GB IV g"));
    }

    #[test]
    fn test_prefix_groups() {
        assert!(is_residential("W"));
        assert!(is_residential("WGV"));
        assert!(is_residential("GS"));
        assert!(!is_residential("GB"));
        assert!(is_industrial("IG"));
        assert!(is_industrial("BB"));
        assert!(!is_industrial("GBGV"));
    }
}
