// Operating-hours window of the exemption ordinance
use super::exemptions::ExemptionRule;
use crate::answers::{ComplianceAnswers, OperatingPattern};

/// Whether the planned opening hours are compatible with the matched category
///
/// Categories flagged as exempt from the window are always compliant.
/// Otherwise only the standard window or an unanswered pattern complies.
pub fn within_operating_window(
    answers: &ComplianceAnswers,
    matched: Option<&ExemptionRule>,
) -> bool {
    if matched.is_some_and(|rule| rule.operating_hours_exempt) {
        return true;
    }

    match answers.operating_pattern {
        None | Some(OperatingPattern::Standard) => true,
        Some(OperatingPattern::Extended | OperatingPattern::RoundTheClock) => false,
    }
}
