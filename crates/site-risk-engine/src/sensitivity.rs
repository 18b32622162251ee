//! Land-use sensitivity keywords
//!
//! The observed land use (Realnutzung) is matched by lower-case substring
//! against two ordered keyword tables. The high-sensitivity table is always
//! checked first and wins outright, even when the text also names a
//! low-sensitivity use.

use shared_types::{first_match, RiskLevel, Rule};

/// Residential keywords, also used by conflict detection
pub const RESIDENTIAL_KEYWORDS: &[&str] = &["wohn"];

/// Industrial or commercial keywords, also used by conflict detection
pub const INDUSTRIAL_KEYWORDS: &[&str] = &["industrie", "gewerbe", "betriebsgebiet"];

/// Trade and office keywords, also used by conflict detection
pub const COMMERCIAL_KEYWORDS: &[&str] = &["handel", "geschäft", "büro"];

/// A group of keywords sharing one sensitivity and note
#[derive(Debug)]
pub struct SensitivityRule {
    pub keywords: &'static [&'static str],
    pub sensitivity: RiskLevel,
    pub note: &'static str,
}

impl Rule<str> for SensitivityRule {
    fn matches(&self, text_lower: &str) -> bool {
        contains_any(text_lower, self.keywords)
    }
}

pub const HIGH_SENSITIVITY: &[SensitivityRule] = &[
    SensitivityRule {
        keywords: RESIDENTIAL_KEYWORDS,
        sensitivity: RiskLevel::High,
        note: "Wohnnutzung im Umfeld, erhöhter Nachbarschaftsschutz.",
    },
    SensitivityRule {
        keywords: &["schule", "kindergarten", "bildung", "universität"],
        sensitivity: RiskLevel::High,
        note: "Bildungseinrichtung im Umfeld.",
    },
    SensitivityRule {
        keywords: &["krankenhaus", "spital", "klinik", "gesundheit", "pflege"],
        sensitivity: RiskLevel::High,
        note: "Gesundheitseinrichtung im Umfeld.",
    },
    SensitivityRule {
        keywords: &["feuerwehr", "rettung", "polizei"],
        sensitivity: RiskLevel::High,
        note: "Einsatzorganisation im Umfeld, Zufahrten freihalten.",
    },
    SensitivityRule {
        keywords: &["friedhof"],
        sensitivity: RiskLevel::High,
        note: "Friedhof im Umfeld, Ruhebedürfnis beachten.",
    },
    SensitivityRule {
        keywords: &["parkanlage", "grünanlage", "grünfläche"],
        sensitivity: RiskLevel::High,
        note: "Park- oder Grünanlage im Umfeld.",
    },
    SensitivityRule {
        keywords: &["wiese"],
        sensitivity: RiskLevel::High,
        note: "Wiesenfläche, Versiegelung und Nutzung eingeschränkt.",
    },
    SensitivityRule {
        keywords: &["wald", "forst"],
        sensitivity: RiskLevel::High,
        note: "Waldfläche, forstrechtliche Beschränkungen.",
    },
];

pub const LOW_SENSITIVITY: &[SensitivityRule] = &[
    SensitivityRule {
        keywords: INDUSTRIAL_KEYWORDS,
        sensitivity: RiskLevel::Low,
        note: "Industrielle oder gewerbliche Umgebung.",
    },
    SensitivityRule {
        keywords: COMMERCIAL_KEYWORDS,
        sensitivity: RiskLevel::Low,
        note: "Geschäftliche Umgebung.",
    },
    SensitivityRule {
        keywords: &["kläranlage"],
        sensitivity: RiskLevel::Low,
        note: "Kläranlage im Umfeld.",
    },
    SensitivityRule {
        keywords: &["deponie", "abfall"],
        sensitivity: RiskLevel::Low,
        note: "Deponie oder Abfallbehandlung im Umfeld.",
    },
    SensitivityRule {
        keywords: &["energie", "kraftwerk", "umspann", "wasserversorgung"],
        sensitivity: RiskLevel::Low,
        note: "Energie- oder Wasserinfrastruktur.",
    },
    SensitivityRule {
        keywords: &["bahn", "gleis"],
        sensitivity: RiskLevel::Low,
        note: "Bahnanlage im Umfeld.",
    },
    SensitivityRule {
        keywords: &["verkehr", "logistik", "transport", "straße"],
        sensitivity: RiskLevel::Low,
        note: "Verkehrs- oder Logistikfläche.",
    },
    SensitivityRule {
        keywords: &["baustelle"],
        sensitivity: RiskLevel::Low,
        note: "Baustelle im Umfeld.",
    },
    SensitivityRule {
        keywords: &["abbau", "steinbruch", "schottergrube"],
        sensitivity: RiskLevel::Low,
        note: "Rohstoffabbau im Umfeld.",
    },
    SensitivityRule {
        keywords: &["militär", "kaserne"],
        sensitivity: RiskLevel::Low,
        note: "Militärische Fläche.",
    },
    SensitivityRule {
        keywords: &["parkplatz", "parkhaus", "garage"],
        sensitivity: RiskLevel::Low,
        note: "Abstellfläche für Fahrzeuge.",
    },
];

const MIXED_USE_NOTE: &str = "Mischnutzung, Einzelfallprüfung erforderlich.";

/// Outcome of classifying a land-use text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensitivity {
    pub level: RiskLevel,
    pub note: &'static str,
}

/// Text contains any keyword; `text_lower` must already be lower-cased
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// Classify a land-use description
pub fn classify_land_use(usage: &str) -> Sensitivity {
    let text_lower = usage.to_lowercase();

    first_match(HIGH_SENSITIVITY, text_lower.as_str())
        .or_else(|| first_match(LOW_SENSITIVITY, text_lower.as_str()))
        .map(|rule| Sensitivity {
            level: rule.sensitivity,
            note: rule.note,
        })
        .unwrap_or(Sensitivity {
            level: RiskLevel::Medium,
            note: MIXED_USE_NOTE,
        })
}
