//! Concurrent lookup gathering
//!
//! The address is geocoded first. All layer lookups then run concurrently,
//! each bounded by the per-layer timeout and the shared deadline, whichever
//! comes first. A lookup that fails or runs out of time is recorded as
//! missing and never fails the whole gathering step.

use crate::aggregate::aggregate_risk_with;
use crate::config::{GatherConfig, RiskConfig};
use crate::raw::{
    EnergyPlanLookup, FloodLookup, NoiseLookup, PlanDocumentLookup, RawGisResult,
    RealnutzungLookup, ZoningLookup,
};
use async_trait::async_trait;
use shared_types::{AggregatedResult, Coordinates, PointOfInterest, ResolvedAddress};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Failure of a single upstream request
#[derive(Error, Debug)]
pub enum LayerFetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum GatherError {
    #[error("No address found for query: {0}")]
    AddressNotFound(String),

    #[error("Geocoding failed")]
    Geocoding(#[source] LayerFetchError),
}

/// Resolves free-text addresses, best candidate first
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<ResolvedAddress>, LayerFetchError>;
}

/// Upstream GIS lookups around a resolved point
#[async_trait]
pub trait LayerSource: Send + Sync {
    async fn zoning(&self, at: Coordinates, radius_m: f64)
        -> Result<ZoningLookup, LayerFetchError>;

    async fn noise(&self, at: Coordinates, radius_m: f64) -> Result<NoiseLookup, LayerFetchError>;

    async fn flood(&self, at: Coordinates, radius_m: f64) -> Result<FloodLookup, LayerFetchError>;

    async fn realnutzung(
        &self,
        at: Coordinates,
        radius_m: f64,
    ) -> Result<RealnutzungLookup, LayerFetchError>;

    async fn energy_plan(
        &self,
        at: Coordinates,
        radius_m: f64,
    ) -> Result<EnergyPlanLookup, LayerFetchError>;

    async fn plan_document(
        &self,
        at: Coordinates,
        radius_m: f64,
    ) -> Result<PlanDocumentLookup, LayerFetchError>;

    async fn points_of_interest(
        &self,
        at: Coordinates,
        radius_m: f64,
    ) -> Result<Vec<PointOfInterest>, LayerFetchError>;
}

pub struct SiteGatherer<G, S> {
    geocoder: G,
    source: S,
    config: GatherConfig,
}

impl<G: Geocoder, S: LayerSource> SiteGatherer<G, S> {
    pub fn new(geocoder: G, source: S, config: GatherConfig) -> Self {
        Self {
            geocoder,
            source,
            config,
        }
    }

    /// Geocode `query` and collect every lookup for the best match
    ///
    /// # Errors
    ///
    /// Returns [`GatherError::AddressNotFound`] when the geocoder yields no
    /// candidate (no layer lookup is issued in that case) and
    /// [`GatherError::Geocoding`] when the geocoder itself fails.
    pub async fn gather(&self, query: &str) -> Result<RawGisResult, GatherError> {
        let deadline = Instant::now() + self.config.deadline();

        let candidates = match timeout_at(deadline, self.geocoder.geocode(query)).await {
            Ok(result) => result.map_err(GatherError::Geocoding)?,
            Err(_) => {
                return Err(GatherError::Geocoding(LayerFetchError::Timeout(
                    self.config.deadline(),
                )))
            }
        };

        let Some(address) = candidates.into_iter().next() else {
            return Err(GatherError::AddressNotFound(query.to_string()));
        };

        let at = address.coordinates;
        let radius = self.config.search_radius_m;
        debug!(label = %address.label, lat = at.lat, lon = at.lon, "address resolved");

        let (zoning, noise, flood, realnutzung, energy_plan, plan_document, pois) = tokio::join!(
            self.bounded("zoning", deadline, self.source.zoning(at, radius)),
            self.bounded("noise", deadline, self.source.noise(at, radius)),
            self.bounded("floodRisk", deadline, self.source.flood(at, radius)),
            self.bounded("realnutzung", deadline, self.source.realnutzung(at, radius)),
            self.bounded("energyPlan", deadline, self.source.energy_plan(at, radius)),
            self.bounded("planDocument", deadline, self.source.plan_document(at, radius)),
            self.bounded("pois", deadline, self.source.points_of_interest(at, radius)),
        );

        Ok(RawGisResult {
            address: Some(address),
            zoning,
            noise,
            flood,
            realnutzung,
            energy_plan,
            plan_document,
            pois: pois.unwrap_or_default(),
        })
    }

    /// Gather and aggregate in one step
    pub async fn assess(
        &self,
        query: &str,
        config: &RiskConfig,
    ) -> Result<AggregatedResult, GatherError> {
        let raw = self.gather(query).await?;
        Ok(aggregate_risk_with(&raw, config))
    }

    async fn bounded<T, F>(&self, layer: &'static str, deadline: Instant, lookup: F) -> Option<T>
    where
        F: Future<Output = Result<T, LayerFetchError>>,
    {
        let layer_deadline = (Instant::now() + self.config.layer_timeout()).min(deadline);
        match timeout_at(layer_deadline, lookup).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                warn!(layer, error = %err, "layer lookup failed");
                None
            }
            Err(_) => {
                warn!(layer, "layer lookup timed out");
                None
            }
        }
    }
}
