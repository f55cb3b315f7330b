pub mod client;
pub mod error;

pub use client::{ExchangeClient, GITHUB_TOKEN_URL};
pub use error::ExchangeError;
