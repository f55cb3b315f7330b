//! Process-wide provider credentials, loaded once at startup.

use secrecy::SecretString;

/// Environment variable holding the OAuth application client ID.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
/// Environment variable holding the OAuth application client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {0} is set but empty")]
    Empty(&'static str),
}

/// OAuth application credentials. Immutable after load; the secret is
/// redacted from `Debug` output and only exposed at the exchange call site.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
        }
    }

    /// Load credentials from `CLIENT_ID` / `CLIENT_SECRET`.
    ///
    /// Missing or empty values are an error: the service refuses to start
    /// rather than send empty credentials to the provider.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env), but over an injectable lookup so
    /// tests can supply fake credentials without touching the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let client_id = required(&lookup, CLIENT_ID_VAR)?;
        let client_secret = required(&lookup, CLIENT_SECRET_VAR)?;
        Ok(Self::new(client_id, client_secret))
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    let value = lookup(var).ok_or(ConfigError::Missing(var))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Empty(var));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_loads_both_variables() {
        let vars = env(&[("CLIENT_ID", "iv1.abc"), ("CLIENT_SECRET", "shh")]);
        let creds = Credentials::from_lookup(|var| vars.get(var).cloned()).unwrap();
        assert_eq!(creds.client_id, "iv1.abc");
        assert_eq!(creds.client_secret.expose_secret(), "shh");
    }

    #[test]
    fn test_missing_client_id() {
        let vars = env(&[("CLIENT_SECRET", "shh")]);
        let err = Credentials::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLIENT_ID")));
    }

    #[test]
    fn test_missing_client_secret() {
        let vars = env(&[("CLIENT_ID", "iv1.abc")]);
        let err = Credentials::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLIENT_SECRET")));
    }

    #[test]
    fn test_empty_value_rejected() {
        let vars = env(&[("CLIENT_ID", "  "), ("CLIENT_SECRET", "shh")]);
        let err = Credentials::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Empty("CLIENT_ID")));
    }

    #[test]
    fn test_values_are_trimmed() {
        let vars = env(&[("CLIENT_ID", " iv1.abc\n"), ("CLIENT_SECRET", "shh ")]);
        let creds = Credentials::from_lookup(|var| vars.get(var).cloned()).unwrap();
        assert_eq!(creds.client_id, "iv1.abc");
        assert_eq!(creds.client_secret.expose_secret(), "shh");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("iv1.abc", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
