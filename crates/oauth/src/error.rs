use thiserror::Error;

/// Failure modes of a single code exchange, kept distinguishable so the
/// callback handler can map each to the right HTTP response.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The token endpoint could not be reached (connect failure or timeout).
    #[error("token endpoint unreachable: {0}")]
    Network(#[source] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider rejected the exchange with status {status}")]
    Rejected { status: reqwest::StatusCode },
    /// The provider answered 2xx but the body carried no usable `access_token`.
    #[error("provider response did not contain an access token")]
    Malformed,
}
