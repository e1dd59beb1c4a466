pub mod commands;
pub mod telemetry;

use std::time::Duration;

use anyhow::Context;
use payloads::brand_kit::GENERATION_TIMEOUT;
use payloads::{ClientError, GenAiClient};
use secrecy::SecretString;

/// Settings for talking to the generative model, read from the environment.
#[derive(Debug)]
pub struct Config {
    pub api_key: SecretString,
    /// Falls back to the client's default model when unset.
    pub model: Option<String>,
    /// Falls back to the public endpoint when unset.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source, e.g. a map in tests.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("GEMINI_API_KEY must be set")?;

        let timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs.trim().parse().with_context(|| {
                    format!("invalid GEMINI_TIMEOUT_SECS {secs:?}")
                })?;
                Duration::from_secs(secs)
            }
            None => GENERATION_TIMEOUT,
        };

        Ok(Config {
            api_key: SecretString::from(api_key),
            model: lookup("GEMINI_MODEL"),
            base_url: lookup("GEMINI_BASE_URL"),
            timeout,
        })
    }

    pub fn client(&self) -> Result<GenAiClient, ClientError> {
        let mut builder = GenAiClient::builder()
            .api_key_secret(self.api_key.clone())
            .timeout(self.timeout);
        if let Some(model) = &self.model {
            builder = builder.model(model);
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }
}
