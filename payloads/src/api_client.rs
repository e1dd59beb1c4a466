use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::brand_kit::{
    BrandKit, GENERATION_TIMEOUT, GenerationFailure, LogoImage,
    brand_kit_request,
};
use crate::{requests, responses};

pub const DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A client for the hosted generative model.
///
/// ```rust,no_run
/// # async fn example() -> Result<(), payloads::ClientError> {
/// let client = payloads::GenAiClient::builder()
///     .api_key("AIza...")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct GenAiClient {
    base_url: String,
    model: String,
    api_key: SecretString,
    timeout: Duration,
    inner_client: reqwest::Client,
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct GenAiClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl GenAiClientBuilder {
    /// Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn api_key_secret(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Defaults to [`DEFAULT_MODEL`].
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Defaults to [`GENERATION_TIMEOUT`]. Enforced by the HTTP client on
    /// native targets; in the browser the caller races the request against
    /// [`GenAiClient::timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GenAiClient, ClientError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                ClientError::Config("GEMINI_API_KEY is not set".into())
            })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("https://") && !base_url.starts_with("http://")
        {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {base_url}"
            )));
        }
        if base_url.starts_with("http://")
            && !base_url.contains("localhost")
            && !base_url.contains("127.0.0.1")
        {
            tracing::warn!(
                %base_url,
                "generative model base URL uses plain HTTP"
            );
        }

        let model = self
            .model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout = self.timeout.unwrap_or(GENERATION_TIMEOUT);

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        let inner_client = builder.build().map_err(|e| {
            ClientError::Config(format!("failed to build HTTP client: {e}"))
        })?;

        let client = GenAiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            timeout,
            inner_client,
        };
        tracing::debug!(?client, "generative model client initialized");
        Ok(client)
    }
}

/// Helper methods for http actions
impl GenAiClient {
    pub fn builder() -> GenAiClientBuilder {
        GenAiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn format_url(&self, method: &str) -> String {
        format!("{}/models/{}:{method}", self.base_url, self.model)
    }

    async fn post(&self, method: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(method))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(body)
            .send()
            .await
    }
}

/// Methods on the generative model API
impl GenAiClient {
    pub async fn generate_content(
        &self,
        body: &requests::GenerateContent,
    ) -> Result<responses::GenerateContentResponse, ClientError> {
        let response = self.post("generateContent", body).await?;
        ok_body(response).await
    }

    /// Ask the model for a brand kit matching `logo`.
    pub async fn generate_brand_kit(
        &self,
        logo: &LogoImage,
    ) -> Result<BrandKit, GenerationFailure> {
        let response = match self
            .generate_content(&brand_kit_request(logo))
            .await
        {
            Ok(response) => response,
            Err(ClientError::Network(e)) if e.is_timeout() => {
                return Err(GenerationFailure::TimedOut(self.timeout));
            }
            Err(e) => return Err(e.into()),
        };
        let text = response.text().ok_or(ClientError::EmptyResponse)?;
        BrandKit::from_json(&text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the service's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Brand kit generation is not configured: {0}")]
    Config(String),
    #[error("The model returned no content.")]
    EmptyResponse,
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        let message = serde_json::from_str::<responses::ErrorResponse>(&text)
            .map(|body| body.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or(text);
        return Err(ClientError::APIError(status, message));
    }
    Ok(response.json::<T>().await?)
}
