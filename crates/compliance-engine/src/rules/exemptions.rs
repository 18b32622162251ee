//! Exemption ordinance (GFVO) category table
//!
//! Ordered, first match wins. Rules with overlapping predicates must not be
//! reordered without deciding precedence again. Missing numeric answers fail
//! every threshold, so an unanswered area never counts as "small enough".

use crate::answers::{
    at_most, yes, ComplianceAnswers, HospitalitySubtype, Sector, WorkshopSubtype,
};
use crate::result::ExemptionCategory;
use shared_types::{first_match, Rule};

/// Floor-area ceiling for retail and warehouse exemptions (m²)
pub const MAX_AREA_M2: f64 = 600.0;

/// Floor-area ceiling inside an approved complex (m²)
pub const EMBEDDED_MAX_AREA_M2: f64 = 400.0;

/// Bed ceiling for exempt accommodation
pub const MAX_BEDS: u32 = 30;

/// One category of the exemption ordinance
pub struct ExemptionRule {
    pub category: ExemptionCategory,
    pub predicate: fn(&ComplianceAnswers) -> bool,
    /// Category is exempt from the standard operating-hours window
    pub operating_hours_exempt: bool,
}

impl Rule<ComplianceAnswers> for ExemptionRule {
    fn matches(&self, answers: &ComplianceAnswers) -> bool {
        (self.predicate)(answers)
    }
}

impl std::fmt::Debug for ExemptionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExemptionRule")
            .field("category", &self.category)
            .field("operating_hours_exempt", &self.operating_hours_exempt)
            .finish()
    }
}

pub const EXEMPTION_RULES: &[ExemptionRule] = &[
    ExemptionRule {
        category: ExemptionCategory::Retail,
        predicate: |a| a.sector == Some(Sector::Retail) && at_most(a.area_m2, MAX_AREA_M2),
        operating_hours_exempt: false,
    },
    ExemptionRule {
        category: ExemptionCategory::Office,
        predicate: |a| a.sector == Some(Sector::Office),
        operating_hours_exempt: false,
    },
    ExemptionRule {
        category: ExemptionCategory::Warehouse,
        predicate: |a| a.sector == Some(Sector::Warehouse) && at_most(a.area_m2, MAX_AREA_M2),
        operating_hours_exempt: false,
    },
    ExemptionRule {
        category: ExemptionCategory::Cosmetics,
        predicate: |a| a.sector == Some(Sector::Cosmetics),
        operating_hours_exempt: false,
    },
    ExemptionRule {
        category: ExemptionCategory::Tailor,
        predicate: |a| {
            a.sector == Some(Sector::Workshop)
                && matches!(
                    a.workshop_subtype,
                    Some(WorkshopSubtype::Tailor | WorkshopSubtype::ShoeService)
                )
        },
        operating_hours_exempt: false,
    },
    ExemptionRule {
        category: ExemptionCategory::TextilePickup,
        predicate: |a| {
            a.sector == Some(Sector::Workshop)
                && a.workshop_subtype == Some(WorkshopSubtype::TextilePickup)
        },
        operating_hours_exempt: true,
    },
    ExemptionRule {
        category: ExemptionCategory::Accommodation,
        predicate: |a| {
            a.is_accommodation()
                && matches!(a.bed_count, Some(beds) if beds <= MAX_BEDS)
                && yes(a.building_use_exclusive)
                && !yes(a.wellness_facilities)
                && !yes(a.full_meals)
        },
        operating_hours_exempt: true,
    },
    ExemptionRule {
        category: ExemptionCategory::IceSalon,
        predicate: |a| {
            a.sector == Some(Sector::GastronomyHotel)
                && a.hospitality_subtype == Some(HospitalitySubtype::IceSalon)
        },
        operating_hours_exempt: true,
    },
    ExemptionRule {
        category: ExemptionCategory::DataCenter,
        predicate: |a| a.sector == Some(Sector::DataCenter),
        operating_hours_exempt: true,
    },
    ExemptionRule {
        category: ExemptionCategory::InfrastructureSite,
        predicate: |a| yes(a.in_infrastructure_site),
        operating_hours_exempt: true,
    },
    ExemptionRule {
        category: ExemptionCategory::EmbeddedFacility,
        predicate: |a| yes(a.in_approved_complex) && at_most(a.area_m2, EMBEDDED_MAX_AREA_M2),
        operating_hours_exempt: true,
    },
];

/// Find the exemption category for an answer set
pub fn match_exemption(answers: &ComplianceAnswers) -> Option<&'static ExemptionRule> {
    first_match(EXEMPTION_RULES, answers)
}
