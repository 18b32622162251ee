// Realnutzung layer: observed land use around the site
use super::{risk_label, unavailable};
use crate::raw::RealnutzungLookup;
use crate::sensitivity::classify_land_use;
use shared_types::{Fact, GeoLayerResult, LayerDetails, LayerId};

pub fn normalize_realnutzung(lookup: Option<&RealnutzungLookup>) -> GeoLayerResult {
    let Some(lookup) = lookup.filter(|l| l.found) else {
        return unavailable(LayerId::Realnutzung);
    };
    let Some(usage) = lookup.usage.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return unavailable(LayerId::Realnutzung);
    };

    let sensitivity = classify_land_use(usage);
    let facts = vec![
        Fact::new("Realnutzung", usage),
        Fact::new("Sensibilität", risk_label(sensitivity.level)),
        Fact::new("Hinweis", sensitivity.note),
    ];

    GeoLayerResult::available(
        LayerId::Realnutzung,
        sensitivity.level,
        facts,
        LayerDetails::Realnutzung {
            usage: usage.to_string(),
        },
    )
    .with_geometry(lookup.geometry.clone())
}
