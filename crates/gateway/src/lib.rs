pub mod assets;
pub mod callback;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::build_router;
pub use server::start_gateway;
pub use state::GatewayState;
