//! Scoring and gathering configuration
//!
//! Weights, penalties and band thresholds are business constants that get
//! revised with the rules they encode. They live here as TOML-loadable data
//! so a revision never touches the aggregation code. Every section defaults
//! to the current values, so a file only needs to name what it overrides.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::{LayerId, Severity};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Complete risk engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub weights: RiskWeights,
    pub penalties: ConflictPenalties,
    pub thresholds: ScoreThresholds,
    pub noise: NoiseBands,
    pub conflicts: ConflictThresholds,
    pub gather: GatherConfig,
}

impl RiskConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or the values fail [`RiskConfig::validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Check value ranges
    pub fn validate(&self) -> anyhow::Result<()> {
        let weights = [
            self.weights.zoning,
            self.weights.realnutzung,
            self.weights.noise,
            self.weights.flood_risk,
            self.weights.energy_plan,
            self.weights.plan_document,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            anyhow::bail!("layer weights must be finite and non-negative");
        }

        let penalties = [
            self.penalties.critical,
            self.penalties.warning,
            self.penalties.info,
        ];
        if penalties.iter().any(|p| !p.is_finite() || *p < 0.0) {
            anyhow::bail!("conflict penalties must be finite and non-negative");
        }

        let bounds = [
            self.thresholds.medium,
            self.thresholds.high,
            self.noise.medium_db,
            self.noise.high_db,
            self.conflicts.noise_db,
            self.gather.search_radius_m,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            anyhow::bail!("thresholds, noise levels and search radius must be finite");
        }
        if self.gather.search_radius_m < 0.0 {
            anyhow::bail!("search radius must not be negative");
        }

        if self.thresholds.medium > self.thresholds.high {
            anyhow::bail!(
                "medium threshold ({}) must not exceed high threshold ({})",
                self.thresholds.medium,
                self.thresholds.high
            );
        }
        if self.noise.medium_db > self.noise.high_db {
            anyhow::bail!("noise medium band must not exceed high band");
        }
        if self.gather.layer_timeout_ms == 0 || self.gather.deadline_ms == 0 {
            anyhow::bail!("gather timeouts must be greater than zero");
        }

        Ok(())
    }
}

/// Layer weights for the weighted average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub zoning: f64,
    pub realnutzung: f64,
    pub noise: f64,
    pub flood_risk: f64,
    pub energy_plan: f64,
    pub plan_document: f64,
}

impl RiskWeights {
    pub fn weight(&self, layer: LayerId) -> f64 {
        match layer {
            LayerId::Zoning => self.zoning,
            LayerId::Realnutzung => self.realnutzung,
            LayerId::Noise => self.noise,
            LayerId::FloodRisk => self.flood_risk,
            LayerId::EnergyPlan => self.energy_plan,
            LayerId::PlanDocument => self.plan_document,
        }
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            zoning: 5.0,
            realnutzung: 3.0,
            noise: 2.0,
            flood_risk: 2.0,
            energy_plan: 1.0,
            plan_document: 0.0,
        }
    }
}

/// Flat score penalty per detected conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictPenalties {
    pub critical: f64,
    pub warning: f64,
    pub info: f64,
}

impl ConflictPenalties {
    pub fn penalty(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

impl Default for ConflictPenalties {
    fn default() -> Self {
        Self {
            critical: 0.5,
            warning: 0.2,
            info: 0.0,
        }
    }
}

/// Score below `medium` is low, below `high` is medium, else high
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            medium: 0.7,
            high: 1.4,
        }
    }
}

/// Noise layer banding in dB(A)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseBands {
    pub medium_db: f64,
    pub high_db: f64,
}

impl Default for NoiseBands {
    fn default() -> Self {
        Self {
            medium_db: 55.0,
            high_db: 65.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictThresholds {
    /// Noise level (inclusive) that conflicts with residential zoning
    pub noise_db: f64,
}

impl Default for ConflictThresholds {
    fn default() -> Self {
        Self { noise_db: 65.0 }
    }
}

/// Lookup gathering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatherConfig {
    /// Search buffer around the resolved point (m)
    pub search_radius_m: f64,
    /// Per-layer timeout (ms)
    pub layer_timeout_ms: u64,
    /// Deadline for the whole gathering step (ms)
    pub deadline_ms: u64,
}

impl GatherConfig {
    pub fn layer_timeout(&self) -> Duration {
        Duration::from_millis(self.layer_timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self {
            search_radius_m: 50.0,
            layer_timeout_ms: 4_000,
            deadline_ms: 8_000,
        }
    }
}
