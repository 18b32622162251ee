//! Location risk assessment
//!
//! Raw per-domain GIS lookups are normalized into uniform layer results,
//! cross-checked for contradictions and folded into one overall risk band.
//!
//! ```text
//! RawGisResult -> layers::normalize_layers -> conflicts::detect_conflicts
//!              -> aggregate::overall_risk -> AggregatedResult
//! ```
//!
//! [`gather::SiteGatherer`] produces the raw input from pluggable
//! geocoder and layer providers.

pub mod aggregate;
pub mod config;
pub mod conflicts;
pub mod gather;
pub mod layers;
pub mod raw;
pub mod sensitivity;
pub mod zoning_code;

pub use aggregate::{aggregate_risk, aggregate_risk_with, overall_risk};
pub use config::{GatherConfig, RiskConfig};
pub use conflicts::detect_conflicts;
pub use gather::{GatherError, Geocoder, LayerFetchError, LayerSource, SiteGatherer};
pub use raw::{
    EnergyPlanLookup, FloodLookup, NoiseLookup, PlanDocumentLookup, RawGisResult,
    RealnutzungLookup, ZoningLookup,
};
pub use sensitivity::classify_land_use;
pub use zoning_code::{analyze_zoning_code, ZoningCode};
