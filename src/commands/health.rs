//! Health Probe

use super::{ApiClient, Method, Transport};
use crate::error::ApiResult;
use crate::models::HealthStatus;

impl<T: Transport> ApiClient<T> {
    /// `GET /health`, served outside the API prefix.
    pub async fn check_health(&self) -> ApiResult<HealthStatus> {
        let url = self.config().health_path.clone();
        let response = self.exchange(Method::Get, url, None).await?;
        Ok(serde_json::from_str(&response.body)?)
    }
}
