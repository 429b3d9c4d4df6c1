use crate::{
    model::maintenance::is_truthy,
    server::error::{config::ConfigError, AppError},
};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Minimum length of `JWT_SECRET`, which signs the session cookie.
const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    /// Key material for the signed session cookie.
    pub session_secret: Vec<u8>,
    /// Enables secure cookies.
    pub production: bool,
    /// Reported by `/api/maintenance-status`.
    pub maintenance_mode: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let session_secret = required("JWT_SECRET")?.into_bytes();
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let environment = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "development".to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            session_secret,
            production: environment.eq_ignore_ascii_case("production"),
            maintenance_mode: lookup("MAINTENANCE_MODE")
                .map(|value| is_truthy(&value))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(overrides: &[(&str, &str)]) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("GOOGLE_CLIENT_ID", "client-id.apps.googleusercontent.com"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("GOOGLE_REDIRECT_URL", "http://localhost:8080/api/auth/callback"),
            ("JWT_SECRET", "k".repeat(64).as_str()),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        for (k, v) in overrides {
            vars.insert(k.to_string(), v.to_string());
        }
        vars
    }

    #[test]
    fn loads_defaults() {
        let vars = vars(&[]);
        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert!(!config.production);
        assert!(!config.maintenance_mode);
        assert_eq!(config.google_token_url, GOOGLE_TOKEN_URL);
    }

    #[test]
    fn reads_environment_and_maintenance_flags() {
        let vars = vars(&[("NODE_ENV", "production"), ("MAINTENANCE_MODE", "true")]);
        let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

        assert!(config.production);
        assert!(config.maintenance_mode);
    }

    #[test]
    fn rejects_missing_variable() {
        let mut vars = vars(&[]);
        vars.remove("GOOGLE_CLIENT_ID");

        let result = Config::from_lookup(|name| vars.get(name).cloned());

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "GOOGLE_CLIENT_ID"
        ));
    }

    #[test]
    fn rejects_short_session_secret() {
        let vars = vars(&[("JWT_SECRET", "too-short")]);

        let result = Config::from_lookup(|name| vars.get(name).cloned());

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
