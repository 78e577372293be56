//! HTTP adapter. Implements ScheduleGateway against the campus schedule
//! REST API.
//!
//! Request timeouts live here, not in the core.

use std::time::Duration;

use reqwest::Client;

use crate::adapters::api::dto::{ScheduleDayDto, StudentGroupDto, map_day, map_group};
use crate::domain::{DomainError, ScheduleDay, StudentGroup, WeekRange};
use crate::ports::ScheduleGateway;

/// Gateway over `GET /api/schedule/groups` and
/// `GET /api/schedule/group/{name}?start=..&end=..`.
pub struct HttpScheduleGateway {
    client: Client,
    base_url: String,
}

impl HttpScheduleGateway {
    /// Create a gateway for `base_url` (scheme + host, optional port).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Remote(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ScheduleGateway for HttpScheduleGateway {
    async fn get_all_groups(&self) -> Result<Vec<StudentGroup>, DomainError> {
        let url = format!("{}/api/schedule/groups", self.base_url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("group list request failed: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Remote(format!(
                "schedule API error {status}: {text}"
            )));
        }

        let dtos: Vec<StudentGroupDto> = res
            .json()
            .await
            .map_err(|e| DomainError::Remote(format!("bad group list payload: {e}")))?;
        Ok(dtos.into_iter().map(map_group).collect())
    }

    async fn get_schedule(
        &self,
        group_name: &str,
        week: WeekRange,
    ) -> Result<Vec<ScheduleDay>, DomainError> {
        let url = format!("{}/api/schedule/group/{}", self.base_url, group_name);
        let res = self
            .client
            .get(&url)
            .query(&[("start", week.start_iso()), ("end", week.end_iso())])
            .send()
            .await
            .map_err(|e| DomainError::Remote(format!("schedule request failed: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Remote(format!(
                "schedule API error {status}: {text}"
            )));
        }

        let dtos: Vec<ScheduleDayDto> = res
            .json()
            .await
            .map_err(|e| DomainError::Remote(format!("bad schedule payload: {e}")))?;
        dtos.into_iter().map(map_day).collect()
    }
}
