//! Client configuration, loaded from TOML.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use ranklab_core::domain::Hypothesis;

/// Connection and default-view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend API.
    pub base_url: String,
    /// Hypothesis shown when none is requested explicitly.
    pub hypothesis: Hypothesis,
    /// Optional date-range filter forwarded to the backend.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Per-request timeout. Cancellation lives here, never in the engine.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            hypothesis: Hypothesis::default(),
            start_date: None,
            end_date: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ClientError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The configured date range, when both ends are present.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }
}
