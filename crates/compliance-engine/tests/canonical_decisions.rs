//! Regression tests pinning the canonical behaviour where two historical
//! variants of the classification flow disagreed.

use compliance_engine::{
    classify, Classification, ComplianceAnswers, ExemptionCategory, ReasonKey, Sector,
};
use pretty_assertions::assert_eq;

fn stationary(sector: Sector) -> ComplianceAnswers {
    ComplianceAnswers {
        sector: Some(sector),
        stationary: Some(true),
        ..Default::default()
    }
}

// Siting in an infrastructure site or approved complex is an ordinary
// table category, not a shortcut to individual assessment.

#[test]
fn test_infrastructure_site_is_exempt_category() {
    let mut answers = stationary(Sector::Other);
    answers.in_infrastructure_site = Some(true);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::FreistellungGfvo);
    assert_eq!(result.category, Some(ExemptionCategory::InfrastructureSite));
}

#[test]
fn test_approved_complex_with_exclusion_needs_permit() {
    let mut answers = stationary(Sector::Other);
    answers.in_approved_complex = Some(true);
    answers.area_m2 = Some(250.0);
    answers.loud_music = Some(true);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::NeedsPermit);
    assert_eq!(result.category, Some(ExemptionCategory::EmbeddedFacility));
    assert_eq!(result.reasons, vec![ReasonKey::LoudMusic]);
}

#[test]
fn test_large_approved_complex_falls_to_individual_assessment() {
    let mut answers = stationary(Sector::Other);
    answers.in_approved_complex = Some(true);
    answers.area_m2 = Some(900.0);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::IndividualAssessment);
    assert_eq!(result.category, None);
}

// Accommodation reasons are informational only.

#[test]
fn test_oversized_accommodation_is_individual_assessment_with_reasons() {
    let mut answers = stationary(Sector::Accommodation);
    answers.bed_count = Some(31);
    answers.building_use_exclusive = Some(true);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::IndividualAssessment);
    assert_eq!(
        result.reasons,
        vec![ReasonKey::IndividualAssessment, ReasonKey::BedsExceeded]
    );
}

#[test]
fn test_accommodation_reasons_do_not_block_other_category() {
    let mut answers = stationary(Sector::Accommodation);
    answers.bed_count = Some(80);
    answers.wellness_facilities = Some(true);
    answers.in_infrastructure_site = Some(true);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::FreistellungGfvo);
    assert_eq!(result.category, Some(ExemptionCategory::InfrastructureSite));
}

#[test]
fn test_accommodation_reasons_ride_along_with_blocking_reason() {
    let mut answers = stationary(Sector::Accommodation);
    answers.bed_count = Some(40);
    answers.external_ventilation = Some(true);

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::NeedsPermit);
    assert_eq!(
        result.reasons,
        vec![ReasonKey::ExternalVentilation, ReasonKey::BedsExceeded]
    );
}

// An unanswered "stationary" field does not qualify as a facility.

#[test]
fn test_unanswered_stationary_is_no_facility() {
    let answers = ComplianceAnswers {
        sector: Some(Sector::Retail),
        area_m2: Some(100.0),
        ..Default::default()
    };

    let result = classify(&answers);
    assert_eq!(result.classification, Classification::NoFacility);
    assert_eq!(result.reasons, vec![ReasonKey::NotFacility]);
    assert_eq!(result.category, None);
}

#[test]
fn test_empty_answers_are_no_facility() {
    let result = classify(&ComplianceAnswers::default());
    assert_eq!(result.classification, Classification::NoFacility);
}
