// Plandokument layer: the binding zoning plan for the parcel
use super::unavailable;
use crate::raw::PlanDocumentLookup;
use crate::zoning_code::NOT_AVAILABLE;
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId, RiskLevel};

pub fn normalize_plan_document(lookup: Option<&PlanDocumentLookup>) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::PlanDocument);
    };

    let mut plan_fact = Fact::new(
        "Plannummer",
        lookup.plan_number.as_deref().unwrap_or(NOT_AVAILABLE),
    );
    if let Some(url) = &lookup.url {
        plan_fact = plan_fact.with_note(url.clone());
    }

    let facts = vec![
        plan_fact,
        Fact::new("Titel", lookup.title.as_deref().unwrap_or(NOT_AVAILABLE)),
        Fact::new(
            "Rechtskräftig seit",
            lookup.in_force_since.as_deref().unwrap_or(NOT_AVAILABLE),
        ),
    ];

    GeoLayerResult::available(
        LayerId::PlanDocument,
        RiskLevel::Low,
        facts,
        LayerDetails::PlanDocument {
            plan_number: lookup.plan_number.clone(),
        },
    )
}
