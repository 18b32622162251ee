//! Classification outcome types
//!
//! Reason and content keys are opaque identifiers resolved by the
//! localization layer. Once shipped, a key never changes meaning.

use serde::{Deserialize, Serialize, Serializer};

/// Terminal legal classification of a planned facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Not a regulated stationary facility (keine Betriebsanlage)
    #[serde(rename = "noFacility")]
    NoFacility,
    /// Formal operating permit required
    #[serde(rename = "needsPermit")]
    NeedsPermit,
    /// Exempt under the exemption ordinance
    #[serde(rename = "freistellungGFVO")]
    FreistellungGfvo,
    /// Authority has to decide case by case
    #[serde(rename = "individualAssessment")]
    IndividualAssessment,
}

/// Exemption category from the ordinance table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExemptionCategory {
    Retail,
    Office,
    Warehouse,
    Cosmetics,
    Tailor,
    TextilePickup,
    Accommodation,
    IceSalon,
    DataCenter,
    InfrastructureSite,
    EmbeddedFacility,
}

/// Why a classification was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonKey {
    NotFacility,
    ExpectedImpairments,
    SummaryExempt,
    IndividualAssessment,
    OperatingHours,
    AreaExceeded,
    ExternalVentilation,
    HazardousRegulated,
    HazardousLabelled,
    LoudMusic,
    IppcSeveso,
    BedsExceeded,
    BuildingUseNotExclusive,
    WellnessFacilities,
    FullMeals,
}

impl ReasonKey {
    pub fn key(self) -> &'static str {
        match self {
            ReasonKey::NotFacility => "classification.reason.notFacility",
            ReasonKey::ExpectedImpairments => "classification.reason.expectedImpairments",
            ReasonKey::SummaryExempt => "classification.reason.summaryExempt",
            ReasonKey::IndividualAssessment => "classification.reason.individualAssessment",
            ReasonKey::OperatingHours => "classification.reason.operatingHours",
            ReasonKey::AreaExceeded => "classification.reason.areaExceeded",
            ReasonKey::ExternalVentilation => "classification.reason.externalVentilation",
            ReasonKey::HazardousRegulated => "classification.reason.hazardousRegulated",
            ReasonKey::HazardousLabelled => "classification.reason.hazardousLabelled",
            ReasonKey::LoudMusic => "classification.reason.loudMusic",
            ReasonKey::IppcSeveso => "classification.reason.ippcSeveso",
            ReasonKey::BedsExceeded => "classification.reason.accommodation.bedsExceeded",
            ReasonKey::BuildingUseNotExclusive => {
                "classification.reason.accommodation.buildingUseNotExclusive"
            }
            ReasonKey::WellnessFacilities => "classification.reason.accommodation.wellness",
            ReasonKey::FullMeals => "classification.reason.accommodation.fullMeals",
        }
    }
}

impl Serialize for ReasonKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl std::fmt::Display for ReasonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Content keys attached to a classification by the key resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedKeys {
    pub general_documents: Vec<&'static str>,
    pub sector_documents: Vec<&'static str>,
    pub special_notes: Vec<&'static str>,
    pub procedure: Vec<&'static str>,
    pub labour: Vec<&'static str>,
    pub operational_duties: Vec<&'static str>,
    pub change_duties: Vec<&'static str>,
    pub pre_check: Vec<&'static str>,
    pub quick_reference: Vec<&'static str>,
    pub disclaimer: Vec<&'static str>,
}

/// Outcome of one classification run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub classification: Classification,
    pub reasons: Vec<ReasonKey>,
    pub category: Option<ExemptionCategory>,
    /// Matched category is exempt from the standard operating-hours window
    pub operating_hours_exempt: bool,
    #[serde(flatten)]
    pub keys: ResolvedKeys,
}
