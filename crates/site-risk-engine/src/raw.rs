//! Raw per-domain lookup records as delivered by the GIS clients
//!
//! One record per domain, addressed by coordinates and search radius.
//! A record that is missing entirely (`None` in [`RawGisResult`]) means the
//! lookup failed or timed out and is treated exactly like `found = false`.

use serde::{Deserialize, Serialize};
use shared_types::{PointOfInterest, ResolvedAddress};

/// Flächenwidmung lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoningLookup {
    pub found: bool,
    /// Full zoning code at the point, e.g. "GB III g"
    pub code: Option<String>,
    /// All codes intersecting the search buffer
    pub codes_in_buffer: Vec<String>,
    pub plan_number: Option<String>,
    pub geometry: Option<serde_json::Value>,
}

/// Strategic noise map lookup (Lden)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoiseLookup {
    pub found: bool,
    /// Level in dB(A)
    pub level_db: Option<f64>,
    /// Dominant source, e.g. "Straße" or "Schiene"
    pub source: Option<String>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloodLookup {
    pub found: bool,
    pub in_flood_zone: bool,
    /// Flood zone designation: HQ30, HQ100 or HQ300
    pub zone: Option<String>,
    pub geometry: Option<serde_json::Value>,
}

/// Realnutzung (observed land use) lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealnutzungLookup {
    pub found: bool,
    pub usage: Option<String>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyPlanLookup {
    pub found: bool,
    pub in_zone: bool,
    pub zone_name: Option<String>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDocumentLookup {
    pub found: bool,
    pub plan_number: Option<String>,
    pub title: Option<String>,
    pub in_force_since: Option<String>,
    pub url: Option<String>,
}

/// Everything the gatherer collected for one address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGisResult {
    pub address: Option<ResolvedAddress>,
    pub zoning: Option<ZoningLookup>,
    pub noise: Option<NoiseLookup>,
    pub flood: Option<FloodLookup>,
    pub realnutzung: Option<RealnutzungLookup>,
    pub energy_plan: Option<EnergyPlanLookup>,
    pub plan_document: Option<PlanDocumentLookup>,
    pub pois: Vec<PointOfInterest>,
}
