use popauth_oauth::ExchangeClient;

/// Shared request state: the exchange client (and with it the provider
/// credentials) built once at startup. Immutable after construction, so no
/// locking anywhere in the gateway.
#[derive(Clone)]
pub struct GatewayState {
    pub exchange: ExchangeClient,
}

impl GatewayState {
    pub fn new(exchange: ExchangeClient) -> Self {
        Self { exchange }
    }
}
