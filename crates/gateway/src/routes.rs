use axum::{Router, routing::get};

use crate::{assets, callback, state::GatewayState};

/// Stateless dispatch table; everything unmatched falls through to axum's
/// default 404.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/new", get(assets::new_session))
        .route("/popup", get(assets::popup))
        .route("/oauth/github/login/callback", get(callback::oauth_callback))
        .route("/public/{*path}", get(assets::public_file))
        .with_state(state)
}
