// Hochwasserrisiko layer
use super::{unavailable, yes_no};
use crate::raw::FloodLookup;
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId, RiskLevel};

/// Risk of a flood lookup: HQ300 zones are medium, any other zone high
pub fn flood_risk(lookup: &FloodLookup) -> RiskLevel {
    if !lookup.in_flood_zone {
        return RiskLevel::Low;
    }
    match lookup.zone.as_deref().map(str::trim) {
        Some(zone) if zone.eq_ignore_ascii_case("HQ300") => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

pub fn normalize_flood(lookup: Option<&FloodLookup>) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::FloodRisk);
    };

    let risk = flood_risk(lookup);
    let mut facts = vec![Fact::new("Im Hochwasserabflussgebiet", yes_no(lookup.in_flood_zone))];
    if lookup.in_flood_zone {
        if let Some(zone) = &lookup.zone {
            facts.push(Fact::new("Hochwasserzone", zone.clone()));
        }
        facts.push(
            Fact::new("Hinweis", "Hochwasserschutzmaßnahmen im Verfahren nachweisen.")
                .with_note("Lagerung wassergefährdender Stoffe nur über Hochwasserniveau."),
        );
    }

    GeoLayerResult::available(
        LayerId::FloodRisk,
        risk,
        facts,
        LayerDetails::FloodRisk {
            in_flood_zone: lookup.in_flood_zone,
        },
    )
    .with_geometry(lookup.geometry.clone())
}
