use serde::{Deserialize, Serialize};

/// Three-valued risk level shared by layers and the overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Numeric value used by the weighted average (low 0, medium 1, high 2)
    pub fn value(self) -> f64 {
        match self {
            RiskLevel::Low => 0.0,
            RiskLevel::Medium => 1.0,
            RiskLevel::High => 2.0,
        }
    }

    /// Traffic-light color for a computed risk. Gray is never produced here.
    pub fn color(self) -> LayerColor {
        match self {
            RiskLevel::Low => LayerColor::Green,
            RiskLevel::Medium => LayerColor::Yellow,
            RiskLevel::High => LayerColor::Red,
        }
    }
}

/// Display color of a layer or of the overall verdict
///
/// `Gray` means "indeterminate, data missing" and is distinct from `Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerColor {
    Green,
    Yellow,
    Red,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Geospatial domains evaluated for a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerId {
    Zoning,
    Realnutzung,
    Noise,
    FloodRisk,
    EnergyPlan,
    PlanDocument,
}

impl LayerId {
    pub const ALL: [LayerId; 6] = [
        LayerId::Zoning,
        LayerId::Noise,
        LayerId::FloodRisk,
        LayerId::Realnutzung,
        LayerId::EnergyPlan,
        LayerId::PlanDocument,
    ];

    /// Stable identifier used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::Zoning => "zoning",
            LayerId::Realnutzung => "realnutzung",
            LayerId::Noise => "noise",
            LayerId::FloodRisk => "floodRisk",
            LayerId::EnergyPlan => "energyPlan",
            LayerId::PlanDocument => "planDocument",
        }
    }

    /// Human label shown on the map legend
    pub fn label(self) -> &'static str {
        match self {
            LayerId::Zoning => "Flächenwidmung",
            LayerId::Realnutzung => "Realnutzung",
            LayerId::Noise => "Umgebungslärm",
            LayerId::FloodRisk => "Hochwasserrisiko",
            LayerId::EnergyPlan => "Energieraumplan",
            LayerId::PlanDocument => "Plandokument",
        }
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One label/value line of a layer's fact sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Fact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Domain-specific payload of an available layer, read by conflict detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayerDetails {
    #[serde(rename_all = "camelCase")]
    Zoning {
        code: String,
        base_code: String,
        is_boundary: bool,
    },
    #[serde(rename_all = "camelCase")]
    Noise { level_db: Option<f64> },
    #[serde(rename_all = "camelCase")]
    FloodRisk { in_flood_zone: bool },
    #[serde(rename_all = "camelCase")]
    Realnutzung { usage: String },
    #[serde(rename_all = "camelCase")]
    EnergyPlan { in_zone: bool },
    #[serde(rename_all = "camelCase")]
    PlanDocument { plan_number: Option<String> },
}

/// Normalized result of one geospatial lookup
///
/// When `available` is false, `facts` is empty, `details` is `None` and
/// `risk`/`color` hold the layer default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLayerResult {
    pub id: LayerId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    pub risk: RiskLevel,
    pub color: LayerColor,
    pub facts: Vec<Fact>,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<LayerDetails>,
}

impl GeoLayerResult {
    /// Stub for a layer whose lookup found nothing or failed
    pub fn unavailable(id: LayerId, risk: RiskLevel, color: LayerColor) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            geometry: None,
            risk,
            color,
            facts: Vec::new(),
            available: false,
            details: None,
        }
    }

    pub fn available(id: LayerId, risk: RiskLevel, facts: Vec<Fact>, details: LayerDetails) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            geometry: None,
            risk,
            color: risk.color(),
            facts,
            available: true,
            details: Some(details),
        }
    }

    pub fn with_geometry(mut self, geometry: Option<serde_json::Value>) -> Self {
        self.geometry = geometry;
        self
    }
}

/// Contradiction between two layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWarning {
    pub description: String,
    pub layers: [LayerId; 2],
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    pub label: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// Nearby point of interest, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub name: String,
    pub category: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

/// Site suitability verdict for one address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<ResolvedAddress>,
    pub overall_risk: RiskLevel,
    pub overall_color: LayerColor,
    pub overall_label: String,
    pub score: f64,
    pub conflicts: Vec<ConflictWarning>,
    pub layers: Vec<GeoLayerResult>,
    pub pois: Vec<PointOfInterest>,
}
