// Betriebsanlage predicate: is this a regulated stationary facility at all?
use crate::answers::ComplianceAnswers;

/// True only for an explicit "stationary" together with a "temporary only"
/// that is negative or unanswered. An unanswered "stationary" does not qualify.
pub fn is_regulated_facility(answers: &ComplianceAnswers) -> bool {
    answers.stationary == Some(true) && answers.temporary_only != Some(true)
}
