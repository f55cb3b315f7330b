use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use popauth_oauth::ExchangeError;

/// Callback failure modes. Every variant maps to an explicit HTTP error
/// response; no failure path ever falls back to a token-less redirect.
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("missing 'code' query parameter")]
    MissingCode,
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

impl CallbackError {
    fn status(&self) -> StatusCode {
        match self {
            // The browser arrived without a code; its request is at fault.
            Self::MissingCode => StatusCode::BAD_REQUEST,
            // The provider was unreachable, said no, or answered garbage.
            Self::Exchange(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "oauth callback failed");
        }
        (status, self.to_string()).into_response()
    }
}
