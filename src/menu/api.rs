use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::menu::model::MenuResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error status {0}")]
    HttpStatus(u16),
    #[error("Failed to parse menu response: {0}")]
    Parse(#[from] serde_json::Error),
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait MenuApi {
    async fn fetch_menu(&self) -> Result<MenuResponse, ApiError>;
}

pub struct MenuClient {
    endpoint: String,
    district: String,
    client: reqwest::Client,
}

impl MenuClient {
    pub fn new(endpoint: String, district: String) -> Self {
        Self {
            endpoint,
            district,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MenuApi for MenuClient {
    async fn fetch_menu(&self) -> Result<MenuResponse, ApiError> {
        tracing::info!("Fetching menu from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("x-district", &self.district)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Menu response status: {}", status);

        if !status.is_success() {
            tracing::error!("Menu request failed with status {}", status);
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let menu: MenuResponse = serde_json::from_str(&body)?;

        Ok(menu)
    }
}
