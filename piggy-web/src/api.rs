//! HTTP client for the backend and the exchange-rate service.

use crate::platform::{AccountSource, RateSource};
use async_trait::async_trait;
use piggy_shared::config::FrontendConfig;
use piggy_shared::models::{Account, ApiError, ApiResult, BearerToken, ExchangeRates};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

const CURRENT_ACCOUNT_PATH: &str = "accounts/current";
const DEMO_ACCOUNT_PATH: &str = "accounts/demo";

/// HTTP client for the backend account endpoints and the rate service.
#[derive(Clone, Debug)]
pub struct PiggyClient {
    base_url: Url,
    rates_url: String,
    client: Client,
}

impl PiggyClient {
    /// Create a client resolving account paths against `base_url`.
    ///
    /// Paths are joined the way a browser resolves relative links, so a base
    /// of `https://host/app/index.html` yields `https://host/app/accounts/current`.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, rates_url: &str) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| ApiError::invalid_url(base_url, err.to_string()))?;
        Ok(Self {
            base_url,
            rates_url: rates_url.to_string(),
            client: Client::new(),
        })
    }

    /// Create a client from configuration, falling back to `page_url` when no
    /// API base is configured.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] if the resolved base is not absolute.
    pub fn from_config(config: &FrontendConfig, page_url: &str) -> ApiResult<Self> {
        let base = if config.api_base.is_empty() {
            page_url
        } else {
            config.api_base.as_str()
        };
        Self::new(base, &config.rates_url)
    }

    fn api_url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::invalid_url(path, err.to_string()))
    }

    /// Fetch the account of the authenticated user.
    ///
    /// # Errors
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses
    /// (including "account not found") and undecodable bodies.
    pub async fn get_current_account(&self, token: &BearerToken) -> ApiResult<Account> {
        let url = self.api_url(CURRENT_ACCOUNT_PATH)?;
        let request = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, token.authorization_value());
        fetch_json(request, url.as_str()).await
    }

    /// Fetch the shared demo account.
    ///
    /// # Errors
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses and
    /// undecodable bodies.
    pub async fn get_demo_account(&self) -> ApiResult<Account> {
        let url = self.api_url(DEMO_ACCOUNT_PATH)?;
        fetch_json(self.client.get(url.clone()), url.as_str()).await
    }

    /// Fetch RUB-based EUR and USD rates.
    ///
    /// # Errors
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses and
    /// undecodable bodies.
    pub async fn get_latest_rates(&self) -> ApiResult<ExchangeRates> {
        fetch_json(self.client.get(&self.rates_url), &self.rates_url).await
    }
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> ApiResult<T> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::transport(url, err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::status(url, status.as_u16()));
    }
    response
        .json()
        .await
        .map_err(|err| ApiError::decode(url, err.to_string()))
}

#[async_trait(?Send)]
impl AccountSource for PiggyClient {
    async fn current_account(&self, token: &BearerToken) -> ApiResult<Account> {
        self.get_current_account(token).await
    }

    async fn demo_account(&self) -> ApiResult<Account> {
        self.get_demo_account().await
    }
}

#[async_trait(?Send)]
impl RateSource for PiggyClient {
    async fn latest_rates(&self) -> ApiResult<ExchangeRates> {
        self.get_latest_rates().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_resolves_like_a_relative_link() {
        let client = PiggyClient::new("https://piggy.test/app/index.html", "https://rates.test/latest")
            .unwrap();
        assert_eq!(
            client.api_url(CURRENT_ACCOUNT_PATH).unwrap().as_str(),
            "https://piggy.test/app/accounts/current"
        );
        assert_eq!(
            client.api_url(DEMO_ACCOUNT_PATH).unwrap().as_str(),
            "https://piggy.test/app/accounts/demo"
        );
    }

    #[test]
    fn test_api_url_with_directory_base() {
        let client = PiggyClient::new("http://localhost:4000/", "https://rates.test/latest").unwrap();
        assert_eq!(
            client.api_url(CURRENT_ACCOUNT_PATH).unwrap().as_str(),
            "http://localhost:4000/accounts/current"
        );
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let error = PiggyClient::new("/api", "https://rates.test/latest").unwrap_err();
        assert!(matches!(error, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_config_prefers_configured_base() {
        let config = FrontendConfig {
            api_base: "https://backend.test/".to_string(),
            ..FrontendConfig::default()
        };
        let client = PiggyClient::from_config(&config, "https://page.test/index.html").unwrap();
        assert_eq!(
            client.api_url(DEMO_ACCOUNT_PATH).unwrap().as_str(),
            "https://backend.test/accounts/demo"
        );

        let fallback =
            PiggyClient::from_config(&FrontendConfig::default(), "https://page.test/index.html");
        // An empty base in the build environment falls back to the page URL.
        if FrontendConfig::default().api_base.is_empty() {
            assert_eq!(
                fallback.unwrap().api_url(DEMO_ACCOUNT_PATH).unwrap().as_str(),
                "https://page.test/accounts/demo"
            );
        }
    }
}
