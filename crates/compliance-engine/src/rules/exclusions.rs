//! Exclusion checks
//!
//! Five independent triggers block an exemption regardless of category.
//! The accommodation sub-check only reports why an accommodation missed
//! its category; it never sets `excluded`.

use super::exemptions::MAX_BEDS;
use crate::answers::{yes, ComplianceAnswers};
use crate::result::ReasonKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionReport {
    /// Reasons from the blocking triggers
    pub reasons: Vec<ReasonKey>,
    /// Informational accommodation reasons
    pub accommodation_reasons: Vec<ReasonKey>,
}

impl ExclusionReport {
    /// Any blocking trigger fired
    pub fn excluded(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Evaluate all exclusion triggers
pub fn evaluate_exclusions(answers: &ComplianceAnswers) -> ExclusionReport {
    let triggers = [
        (answers.external_ventilation, ReasonKey::ExternalVentilation),
        (answers.hazardous_storage_regulated, ReasonKey::HazardousRegulated),
        (answers.hazardous_storage_labelled, ReasonKey::HazardousLabelled),
        (answers.loud_music, ReasonKey::LoudMusic),
        (answers.ippc_seveso, ReasonKey::IppcSeveso),
    ];

    let reasons = triggers
        .into_iter()
        .filter(|(answer, _)| yes(*answer))
        .map(|(_, reason)| reason)
        .collect();

    ExclusionReport {
        reasons,
        accommodation_reasons: check_accommodation(answers),
    }
}

fn check_accommodation(answers: &ComplianceAnswers) -> Vec<ReasonKey> {
    let mut reasons = Vec::new();
    if !answers.is_accommodation() {
        return reasons;
    }

    if matches!(answers.bed_count, Some(beds) if beds > MAX_BEDS) {
        reasons.push(ReasonKey::BedsExceeded);
    }
    if answers.building_use_exclusive == Some(false) {
        reasons.push(ReasonKey::BuildingUseNotExclusive);
    }
    if yes(answers.wellness_facilities) {
        reasons.push(ReasonKey::WellnessFacilities);
    }
    if yes(answers.full_meals) {
        reasons.push(ReasonKey::FullMeals);
    }

    reasons
}
