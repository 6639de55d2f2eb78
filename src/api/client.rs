use crate::config::AppConfig;
use crate::error::TrendzError;
use crate::model::ProductDetailsResponse;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Fetches one product and its similar products.
pub trait ProductApi {
    async fn fetch_product(
        &self,
        id: &str,
        token: &str,
    ) -> Result<ProductDetailsResponse, TrendzError>;
}

pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductApi {
    pub fn new(config: &AppConfig) -> Result<Self, TrendzError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("trendz-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpProductApi {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn product_url(&self, id: &str) -> Result<Url, TrendzError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TrendzError::Config(format!("API URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["products", id]);
        Ok(url)
    }
}

impl ProductApi for HttpProductApi {
    async fn fetch_product(
        &self,
        id: &str,
        token: &str,
    ) -> Result<ProductDetailsResponse, TrendzError> {
        let url = self.product_url(id)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let status = response.status();
        tracing::debug!("Product {} responded with {}", id, status);

        if status == StatusCode::NOT_FOUND {
            return Err(TrendzError::ProductNotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(TrendzError::UnexpectedStatus {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
