//! HTTP wrappers for the backend endpoints.
//!
//! Thin by intent: each method issues one GET, verifies the envelope, and
//! hands converted domain types to the caller. The engine never sees a DTO.

use std::time::Duration;

use chrono::NaiveDate;

use crate::config::ClientConfig;
use crate::dto::{DailyResponse, GeneralResponse, RankingResponse};
use crate::error::ClientError;
use ranklab_core::domain::{Agent, AgentDaily, GeneralDay, Hypothesis};

/// Blocking client for the dashboard backend.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// All agents with their hypothesis periods: `GET /ranking/agents`.
    pub fn fetch_ranking(
        &self,
        hypothesis: Hypothesis,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Agent>, ClientError> {
        let url = format!("{}/ranking/agents", self.base_url);
        let response: RankingResponse = self.get(&url, hypothesis, range)?;
        if !response.success {
            return Err(ClientError::Contract(format!(
                "ranking endpoint reported failure for hypothesis {hypothesis}"
            )));
        }
        Ok(response.agents.into_iter().map(Agent::from).collect())
    }

    /// Cumulative daily ROI for all agents: `GET /roi/agents/daily`.
    ///
    /// `strict` selects the backend's strict date-filter variant, which
    /// requires both range ends.
    pub fn fetch_daily(
        &self,
        hypothesis: Hypothesis,
        range: Option<(NaiveDate, NaiveDate)>,
        strict: bool,
    ) -> Result<Vec<AgentDaily>, ClientError> {
        let url = if strict && range.is_some() {
            format!("{}/roi/agents/daily/filtered", self.base_url)
        } else {
            format!("{}/roi/agents/daily", self.base_url)
        };
        let response: DailyResponse = self.get(&url, hypothesis, range)?;
        if !response.success {
            return Err(ClientError::Contract(format!(
                "daily endpoint reported failure for hypothesis {hypothesis}"
            )));
        }
        Ok(response.agents.into_iter().map(AgentDaily::from).collect())
    }

    /// The aggregated gains/losses feed: `GET /roi/general`.
    pub fn fetch_general(&self, hypothesis: Hypothesis) -> Result<Vec<GeneralDay>, ClientError> {
        let url = format!("{}/roi/general", self.base_url);
        let response: GeneralResponse = self.get(&url, hypothesis, None)?;
        if !response.success {
            return Err(ClientError::Contract(format!(
                "general endpoint reported failure for hypothesis {hypothesis}"
            )));
        }
        Ok(response.days.into_iter().map(GeneralDay::from).collect())
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        hypothesis: Hypothesis,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<T, ClientError> {
        let mut request = self
            .http
            .get(url)
            .query(&[("hypothesis", hypothesis.to_string())]);
        if let Some((start, end)) = range {
            request = request.query(&[
                ("startDate", start.format("%Y-%m-%d").to_string()),
                ("endDate", end.format("%Y-%m-%d").to_string()),
            ]);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>()?)
    }
}
