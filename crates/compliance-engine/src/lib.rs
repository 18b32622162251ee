//! Operating-permit classification for planned business facilities
//!
//! A single deterministic pass over the questionnaire answers:
//! 1. Facility predicate - is this a regulated stationary facility?
//! 2. Exemption table and exclusion checks
//! 3. Decider - one of four terminal classifications
//! 4. Key resolver - document, duty and notice keys for the result page

pub mod answers;
pub mod keys;
pub mod result;
pub mod rules;

pub use answers::{ComplianceAnswers, HospitalitySubtype, OperatingPattern, Sector, WorkshopSubtype};
pub use result::{Classification, ClassificationResult, ExemptionCategory, ReasonKey, ResolvedKeys};

use answers::yes;
use rules::exclusions::evaluate_exclusions;
use rules::exemptions::{match_exemption, MAX_AREA_M2};
use rules::facility::is_regulated_facility;
use rules::operating_hours::within_operating_window;

/// Classification engine entry point
///
/// Stateless; one instance can serve any number of concurrent callers.
pub struct ClassificationEngine;

impl ClassificationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, answers: &ComplianceAnswers) -> ClassificationResult {
        classify(answers)
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify an answer set
pub fn classify(answers: &ComplianceAnswers) -> ClassificationResult {
    let (classification, reasons, matched) = decide(answers);

    ClassificationResult {
        classification,
        reasons,
        category: matched.map(|rule| rule.category),
        operating_hours_exempt: matched.is_some_and(|rule| rule.operating_hours_exempt),
        keys: keys::resolve_keys(classification, answers),
    }
}

type Decision = (
    Classification,
    Vec<ReasonKey>,
    Option<&'static rules::exemptions::ExemptionRule>,
);

fn decide(answers: &ComplianceAnswers) -> Decision {
    if !is_regulated_facility(answers) {
        return (Classification::NoFacility, vec![ReasonKey::NotFacility], None);
    }

    let matched = match_exemption(answers);

    if yes(answers.expected_impairments) {
        return (
            Classification::NeedsPermit,
            vec![ReasonKey::ExpectedImpairments],
            matched,
        );
    }

    let in_window = within_operating_window(answers, matched);
    let exclusions = evaluate_exclusions(answers);

    if matched.is_some() && in_window && !exclusions.excluded() {
        return (
            Classification::FreistellungGfvo,
            vec![ReasonKey::SummaryExempt],
            matched,
        );
    }

    let mut reasons = Vec::new();
    if !in_window {
        reasons.push(ReasonKey::OperatingHours);
    }
    if area_exceeded(answers) {
        reasons.push(ReasonKey::AreaExceeded);
    }
    reasons.extend(exclusions.reasons.iter().copied());
    let blocking = !reasons.is_empty();
    reasons.extend(exclusions.accommodation_reasons.iter().copied());

    if matched.is_some() || blocking {
        return (Classification::NeedsPermit, reasons, matched);
    }

    // Accommodation reasons are informational and ride along here
    let mut reasons = vec![ReasonKey::IndividualAssessment];
    reasons.extend(exclusions.accommodation_reasons);
    (Classification::IndividualAssessment, reasons, None)
}

fn area_exceeded(answers: &ComplianceAnswers) -> bool {
    matches!(answers.sector, Some(Sector::Retail | Sector::Warehouse))
        && matches!(answers.area_m2, Some(area) if area > MAX_AREA_M2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::option;
    use proptest::prelude::*;

    fn sector() -> impl Strategy<Value = Sector> {
        prop_oneof![
            Just(Sector::Retail),
            Just(Sector::Office),
            Just(Sector::Warehouse),
            Just(Sector::Cosmetics),
            Just(Sector::Workshop),
            Just(Sector::Accommodation),
            Just(Sector::GastronomyHotel),
            Just(Sector::DataCenter),
            Just(Sector::SelfService),
            Just(Sector::Other),
        ]
    }

    fn pattern() -> impl Strategy<Value = OperatingPattern> {
        prop_oneof![
            Just(OperatingPattern::Standard),
            Just(OperatingPattern::Extended),
            Just(OperatingPattern::RoundTheClock),
        ]
    }

    prop_compose! {
        fn any_answers()(
            sector in option::of(sector()),
            pattern in option::of(pattern()),
            area in option::of(0.0f64..2_000.0),
            beds in option::of(0u32..100),
            flags in proptest::collection::vec(option::of(any::<bool>()), 12),
        ) -> ComplianceAnswers {
            ComplianceAnswers {
                sector,
                operating_pattern: pattern,
                area_m2: area,
                bed_count: beds,
                building_use_exclusive: flags[0],
                wellness_facilities: flags[1],
                full_meals: flags[2],
                external_ventilation: flags[3],
                hazardous_storage_regulated: flags[4],
                hazardous_storage_labelled: flags[5],
                loud_music: flags[6],
                ippc_seveso: flags[7],
                expected_impairments: flags[8],
                in_infrastructure_site: flags[9],
                in_approved_complex: flags[10],
                prior_permits: flags[11],
                ..Default::default()
            }
        }
    }

    proptest! {
        /// Property: non-stationary or temporary answers are never a facility
        #[test]
        fn non_facility_is_always_no_facility(
            mut answers in any_answers(),
            temporary in any::<bool>(),
        ) {
            if temporary {
                answers.stationary = Some(true);
                answers.temporary_only = Some(true);
            } else {
                answers.stationary = Some(false);
            }
            let result = classify(&answers);
            prop_assert_eq!(result.classification, Classification::NoFacility);
            prop_assert_eq!(result.reasons, vec![ReasonKey::NotFacility]);
            prop_assert_eq!(result.category, None);
        }

        /// Property: expected impairments always require a permit
        #[test]
        fn impairments_always_need_permit(
            mut answers in any_answers(),
            temporary in option::of(Just(false)),
        ) {
            answers.stationary = Some(true);
            answers.temporary_only = temporary;
            answers.expected_impairments = Some(true);
            prop_assert_eq!(classify(&answers).classification, Classification::NeedsPermit);
        }

        /// Property: classification is deterministic
        #[test]
        fn classification_is_deterministic(mut answers in any_answers()) {
            answers.stationary = Some(true);
            prop_assert_eq!(classify(&answers), classify(&answers));
        }
    }
}
