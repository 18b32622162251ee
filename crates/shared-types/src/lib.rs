pub mod rules;
pub mod types;

pub use rules::{first_match, Rule};
pub use types::{
    AggregatedResult, ConflictWarning, Coordinates, Fact, GeoLayerResult, LayerColor,
    LayerDetails, LayerId, PointOfInterest, ResolvedAddress, RiskLevel, Severity,
};
