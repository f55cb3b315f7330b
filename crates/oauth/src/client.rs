use std::time::Duration;

use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, warn};

use popauth_config::Credentials;

use crate::error::ExchangeError;

/// GitHub's token-exchange endpoint.
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Upper bound on one outbound exchange call. Codes are single-use, so a
/// slow provider gets one bounded attempt and the request fails.
const DEFAULT_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Client for the provider's token endpoint: trades an authorization code
/// for an access token. One outbound POST per call, no retries.
#[derive(Clone)]
pub struct ExchangeClient {
    http: reqwest::Client,
    credentials: Credentials,
    token_url: String,
    timeout: Duration,
}

impl ExchangeClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_token_url(credentials, GITHUB_TOKEN_URL)
    }

    /// Build a client against a non-default token endpoint (tests point this
    /// at a mock provider).
    pub fn with_token_url(credentials: Credentials, token_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            token_url: token_url.into(),
            timeout: DEFAULT_EXCHANGE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The caller guarantees a non-empty `code`; this makes exactly one
    /// outbound call and never retries (codes are single-use on the provider
    /// side, a retry would be rejected anyway).
    pub async fn exchange(&self, code: &str) -> Result<String, ExchangeError> {
        debug!(token_url = %self.token_url, "exchanging authorization code");

        let response = self
            .http
            .post(&self.token_url)
            .query(&[
                ("client_id", self.credentials.client_id.as_str()),
                (
                    "client_secret",
                    self.credentials.client_secret.expose_secret().as_str(),
                ),
                ("code", code),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(ExchangeError::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "provider rejected the code exchange");
            return Err(ExchangeError::Rejected { status });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|_| ExchangeError::Malformed)?;

        match body.access_token {
            Some(token) if !token.is_empty() => {
                debug!(token_len = token.len(), "code exchange succeeded");
                Ok(token)
            },
            _ => Err(ExchangeError::Malformed),
        }
    }
}
