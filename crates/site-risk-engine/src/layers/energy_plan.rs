// Energieraumplan layer
use super::{unavailable, yes_no};
use crate::raw::EnergyPlanLookup;
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId, RiskLevel};

pub fn normalize_energy_plan(lookup: Option<&EnergyPlanLookup>) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::EnergyPlan);
    };

    let risk = if lookup.in_zone {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mut facts = vec![Fact::new("Im Energieraumplan-Gebiet", yes_no(lookup.in_zone))];
    if lookup.in_zone {
        if let Some(name) = &lookup.zone_name {
            facts.push(Fact::new("Gebiet", name.clone()));
        }
        facts.push(Fact::new(
            "Hinweis",
            "Neue Heizungsanlagen nur mit erneuerbaren Energieträgern oder Fernwärme.",
        ));
    }

    GeoLayerResult::available(
        LayerId::EnergyPlan,
        risk,
        facts,
        LayerDetails::EnergyPlan {
            in_zone: lookup.in_zone,
        },
    )
    .with_geometry(lookup.geometry.clone())
}
