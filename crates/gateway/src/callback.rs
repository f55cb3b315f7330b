//! The OAuth callback: bridges the provider's redirect to the popup redirect.

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::{error::CallbackError, state::GatewayState};

#[derive(Debug, Deserialize)]
pub(crate) struct CallbackQuery {
    code: Option<String>,
}

/// `GET /oauth/github/login/callback?code=...`
///
/// Exchanges the authorization code for an access token, then 302-redirects
/// the browser to the popup page with the token in the query string. The
/// token is never stored server-side; this handler is its only transit point.
pub(crate) async fn oauth_callback(
    State(state): State<GatewayState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, CallbackError> {
    let code = query
        .code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or(CallbackError::MissingCode)?;

    let token = state.exchange.exchange(code).await?;
    info!(token_len = token.len(), "code exchanged, redirecting to popup");

    Ok(redirect_to_popup(&token))
}

fn redirect_to_popup(token: &str) -> Response {
    let location = format!("/popup?access_token={}", urlencoding::encode(token));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_location_carries_token() {
        let response = redirect_to_popup("tok_xyz");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/popup?access_token=tok_xyz"
        );
    }

    #[test]
    fn test_redirect_location_is_percent_encoded() {
        let response = redirect_to_popup("tok/with+odd&chars");
        assert_eq!(
            response.headers()[header::LOCATION],
            "/popup?access_token=tok%2Fwith%2Bodd%26chars"
        );
    }
}
