//! Questionnaire answer model
//!
//! Every field is optional. `None` means "not yet answered", never "no".
//! Enumerations are closed so a new sector or pattern has to be handled
//! explicitly by every rule table that matches on it.

use serde::{Deserialize, Serialize};

/// Business sector of the planned facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sector {
    Retail,
    Office,
    Warehouse,
    Cosmetics,
    Workshop,
    Accommodation,
    GastronomyHotel,
    DataCenter,
    SelfService,
    Other,
}

impl Sector {
    /// Hospitality or accommodation sectors that get sector documents
    pub fn is_hospitality(self) -> bool {
        matches!(self, Sector::Accommodation | Sector::GastronomyHotel)
    }
}

/// Sub-type when sector is gastronomy/hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HospitalitySubtype {
    Beherbergung,
    IceSalon,
    Restaurant,
    Cafe,
    Bar,
}

/// Sub-type when sector is workshop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkshopSubtype {
    Tailor,
    ShoeService,
    TextilePickup,
    Other,
}

/// Planned opening-hours pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatingPattern {
    /// Within the standard window of the exemption ordinance
    Standard,
    Extended,
    RoundTheClock,
}

/// Full answer set of the pre-check questionnaire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceAnswers {
    pub sector: Option<Sector>,
    pub hospitality_subtype: Option<HospitalitySubtype>,
    pub workshop_subtype: Option<WorkshopSubtype>,

    /// Usable floor area in m²
    pub area_m2: Option<f64>,
    pub bed_count: Option<u32>,
    pub person_count: Option<u32>,
    pub operating_pattern: Option<OperatingPattern>,

    pub stationary: Option<bool>,
    pub temporary_only: Option<bool>,
    pub building_use_exclusive: Option<bool>,
    pub wellness_facilities: Option<bool>,
    pub full_meals: Option<bool>,
    pub external_ventilation: Option<bool>,
    pub hazardous_storage_regulated: Option<bool>,
    pub hazardous_storage_labelled: Option<bool>,
    pub loud_music: Option<bool>,
    pub ippc_seveso: Option<bool>,
    pub expected_impairments: Option<bool>,
    pub in_infrastructure_site: Option<bool>,
    pub in_approved_complex: Option<bool>,
    pub prior_permits: Option<bool>,
}

/// Explicit "yes"
pub(crate) fn yes(answer: Option<bool>) -> bool {
    answer == Some(true)
}

/// Numeric threshold check that fails closed on a missing value
pub(crate) fn at_most(value: Option<f64>, limit: f64) -> bool {
    matches!(value, Some(v) if v <= limit)
}

impl ComplianceAnswers {
    /// Answers describe an accommodation-type facility
    pub fn is_accommodation(&self) -> bool {
        match self.sector {
            Some(Sector::Accommodation) => true,
            Some(Sector::GastronomyHotel) => {
                self.hospitality_subtype == Some(HospitalitySubtype::Beherbergung)
            }
            _ => false,
        }
    }
}
