use crate::config::CatalogConfig;
use crate::domain::model::{EnquiryRequest, Package, Service};
use crate::domain::ports::PackageSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Non-2xx responses carry `{"error": "..."}` when the backend has
/// something to say.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin client for the backend REST API. Stateless by design: no caching
/// and no shared mutable state; staleness is the caller's concern.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn packages(&self, featured: Option<bool>) -> Result<Vec<Package>> {
        let mut request = self.client.get(self.url("/packages"));
        if let Some(featured) = featured {
            request = request.query(&[("featured", featured.to_string())]);
        }
        self.execute(request).await
    }

    pub async fn package(&self, id: &str) -> Result<Package> {
        self.execute(self.client.get(self.url(&format!("/packages/{}", id))))
            .await
    }

    pub async fn services(&self) -> Result<Vec<Service>> {
        self.execute(self.client.get(self.url("/services"))).await
    }

    /// Fire-and-forget contact-form submission; the response body is not
    /// meaningful beyond success or failure.
    pub async fn submit_enquiry(&self, enquiry: &EnquiryRequest) -> Result<()> {
        let request = self.client.post(self.url("/enquiries")).json(enquiry);
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        tracing::debug!(status = %status, "API response");

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("server returned HTTP {}", status.as_u16()),
            };
            return Err(CatalogError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| CatalogError::Malformed {
            reason: e.to_string(),
        })
    }

    /// A send error without a status means no response was obtained at all;
    /// that is surfaced as the backend being unreachable, naming the
    /// configured origin, so the consumer can distinguish "server down"
    /// from "server returned an error".
    fn classify(&self, err: reqwest::Error) -> CatalogError {
        match err.status() {
            Some(status) => CatalogError::Server {
                status: status.as_u16(),
                message: format!("server returned HTTP {}", status.as_u16()),
            },
            None => CatalogError::Unreachable {
                origin: self.base_url.clone(),
            },
        }
    }
}

#[async_trait]
impl PackageSource for ApiClient {
    async fn packages(&self, featured: Option<bool>) -> Result<Vec<Package>> {
        ApiClient::packages(self, featured).await
    }
}
