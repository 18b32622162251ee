//! Content keys for the result page
//!
//! Pure table lookups. The keys name documents, duties and notices that the
//! content layer renders; nothing here changes a classification.

use crate::answers::{yes, ComplianceAnswers, Sector};
use crate::result::{Classification, ResolvedKeys};

const GENERAL_DOCUMENTS: &[&str] = &[
    "documents.general.applicationForm",
    "documents.general.operationalDescription",
    "documents.general.sitePlan",
    "documents.general.floorPlans",
    "documents.general.machineList",
    "documents.general.ventilationPlan",
    "documents.general.wasteManagementConcept",
    "documents.general.landRegisterExtract",
];

const HOSPITALITY_DOCUMENTS: &[&str] = &[
    "documents.sector.hospitality.seatingPlan",
    "documents.sector.hospitality.kitchenExhaust",
    "documents.sector.hospitality.greaseSeparator",
    "documents.sector.hospitality.noiseAssessment",
];

const ACCOMMODATION_DOCUMENTS: &[&str] = &[
    "documents.sector.accommodation.bedPlan",
    "documents.sector.accommodation.escapeRoutes",
    "documents.sector.accommodation.fireSafetyConcept",
];

const NOTE_BUILDING_PROCEDURE: &str = "notes.buildingProcedure";
const NOTE_SELF_SERVICE: &str = "notes.selfService";
const NOTE_PRIOR_PERMITS: &str = "notes.priorPermits";

const PROCEDURE: &[&str] = &[
    "procedure.consultation",
    "procedure.submission",
    "procedure.hearing",
    "procedure.decision",
];

const LABOUR: &[&str] = &[
    "labour.workplaceEvaluation",
    "labour.firstAid",
    "labour.fireWarden",
    "labour.sanitaryFacilities",
];

const OPERATIONAL_DUTIES: &[&str] = &[
    "duties.operational.periodicInspection",
    "duties.operational.electricalInspection",
    "duties.operational.fireExtinguishers",
];

const CHANGE_DUTIES: &[&str] = &[
    "duties.change.notifyChanges",
    "duties.change.ownerTransfer",
    "duties.change.closure",
];

const PRE_CHECK: &[&str] = &[
    "preCheck.zoning",
    "preCheck.buildingConsent",
    "preCheck.tradeLicence",
];

const QUICK_REFERENCE: &[&str] = &[
    "quickReference.authority",
    "quickReference.fees",
    "quickReference.duration",
];

const DISCLAIMER: &[&str] = &["disclaimer.noLegalAdvice", "disclaimer.authorityDecides"];

/// Resolve the content keys for a classification
pub fn resolve_keys(classification: Classification, answers: &ComplianceAnswers) -> ResolvedKeys {
    let is_facility = classification != Classification::NoFacility;

    let general_documents = match classification {
        Classification::NeedsPermit | Classification::IndividualAssessment => {
            GENERAL_DOCUMENTS.to_vec()
        }
        Classification::NoFacility | Classification::FreistellungGfvo => Vec::new(),
    };

    let sector_documents = match answers.sector {
        _ if !is_facility => Vec::new(),
        _ if answers.is_accommodation() => ACCOMMODATION_DOCUMENTS.to_vec(),
        Some(Sector::GastronomyHotel) => HOSPITALITY_DOCUMENTS.to_vec(),
        _ => Vec::new(),
    };

    let mut special_notes = vec![NOTE_BUILDING_PROCEDURE];
    if answers.sector == Some(Sector::SelfService) {
        special_notes.push(NOTE_SELF_SERVICE);
    }
    if yes(answers.prior_permits) {
        special_notes.push(NOTE_PRIOR_PERMITS);
    }

    let facility_only = |keys: &[&'static str]| {
        if is_facility {
            keys.to_vec()
        } else {
            Vec::new()
        }
    };

    ResolvedKeys {
        general_documents,
        sector_documents,
        special_notes,
        procedure: PROCEDURE.to_vec(),
        labour: facility_only(LABOUR),
        operational_duties: facility_only(OPERATIONAL_DUTIES),
        change_duties: facility_only(CHANGE_DUTIES),
        pre_check: PRE_CHECK.to_vec(),
        quick_reference: QUICK_REFERENCE.to_vec(),
        disclaimer: DISCLAIMER.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::HospitalitySubtype;

    fn sector(sector: Sector) -> ComplianceAnswers {
        ComplianceAnswers {
            sector: Some(sector),
            ..Default::default()
        }
    }

    #[test]
    fn test_general_documents_only_when_procedure_needed() {
        let answers = sector(Sector::Retail);
        assert!(!resolve_keys(Classification::NeedsPermit, &answers)
            .general_documents
            .is_empty());
        assert!(!resolve_keys(Classification::IndividualAssessment, &answers)
            .general_documents
            .is_empty());
        assert!(resolve_keys(Classification::FreistellungGfvo, &answers)
            .general_documents
            .is_empty());
    }

    #[test]
    fn test_sector_documents_for_hospitality_only() {
        let keys = resolve_keys(Classification::NeedsPermit, &sector(Sector::GastronomyHotel));
        assert!(keys.sector_documents.contains(&"documents.sector.hospitality.seatingPlan"));

        let keys = resolve_keys(Classification::NeedsPermit, &sector(Sector::Accommodation));
        assert!(keys.sector_documents.contains(&"documents.sector.accommodation.bedPlan"));

        let keys = resolve_keys(Classification::NeedsPermit, &sector(Sector::Office));
        assert!(keys.sector_documents.is_empty());
    }

    #[test]
    fn test_hotel_lodging_gets_accommodation_documents() {
        let mut answers = sector(Sector::GastronomyHotel);
        answers.hospitality_subtype = Some(HospitalitySubtype::Beherbergung);
        let keys = resolve_keys(Classification::NeedsPermit, &answers);
        assert!(keys.sector_documents.contains(&"documents.sector.accommodation.bedPlan"));
        assert!(!keys.sector_documents.contains(&"documents.sector.hospitality.seatingPlan"));

        answers.hospitality_subtype = Some(HospitalitySubtype::Restaurant);
        let keys = resolve_keys(Classification::NeedsPermit, &answers);
        assert!(keys.sector_documents.contains(&"documents.sector.hospitality.seatingPlan"));
    }

    #[test]
    fn test_special_notes() {
        let keys = resolve_keys(Classification::FreistellungGfvo, &sector(Sector::Office));
        assert_eq!(keys.special_notes, vec![NOTE_BUILDING_PROCEDURE]);

        let mut answers = sector(Sector::SelfService);
        answers.prior_permits = Some(true);
        let keys = resolve_keys(Classification::IndividualAssessment, &answers);
        assert_eq!(
            keys.special_notes,
            vec![NOTE_BUILDING_PROCEDURE, NOTE_SELF_SERVICE, NOTE_PRIOR_PERMITS]
        );
    }

    #[test]
    fn test_no_facility_keeps_procedural_keys_only() {
        let keys = resolve_keys(Classification::NoFacility, &sector(Sector::GastronomyHotel));
        assert!(keys.general_documents.is_empty());
        assert!(keys.sector_documents.is_empty());
        assert!(keys.labour.is_empty());
        assert!(keys.operational_duties.is_empty());
        assert!(keys.change_duties.is_empty());
        assert!(!keys.procedure.is_empty());
        assert!(!keys.pre_check.is_empty());
        assert!(!keys.quick_reference.is_empty());
        assert!(!keys.disclaimer.is_empty());
    }

    #[test]
    fn test_static_keys_for_every_facility_classification() {
        for classification in [
            Classification::NeedsPermit,
            Classification::FreistellungGfvo,
            Classification::IndividualAssessment,
        ] {
            let keys = resolve_keys(classification, &ComplianceAnswers::default());
            assert_eq!(keys.labour, LABOUR.to_vec());
            assert_eq!(keys.operational_duties, OPERATIONAL_DUTIES.to_vec());
            assert_eq!(keys.change_duties, CHANGE_DUTIES.to_vec());
        }
    }
}
