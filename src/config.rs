//! Environment-driven configuration with hard-coded local-development
//! defaults. Every variable is optional.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Environment variables read at startup. Unset variables fall back to the
/// defaults below.
const ENV_KEYS: &[&str] = &[
    "DB_HOST",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "CORS_ORIGIN",
    "LOGLEVEL",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Single origin allowed to call the API from a browser.
    pub cors_origin: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_user: "usuario".to_string(),
            db_password: "clave".to_string(),
            db_name: "miapp".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ApiError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(ENV_KEYS))
            .extract()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_development() {
        figment::Jail::expect_with(|_jail| {
            let cfg = Config::load().expect("failed to load config");
            assert_eq!(cfg.db_host, "localhost");
            assert_eq!(cfg.db_user, "usuario");
            assert_eq!(cfg.db_password, "clave");
            assert_eq!(cfg.db_name, "miapp");
            assert_eq!(cfg.cors_origin, "http://localhost:8080");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "db.interno");
            jail.set_env("DB_NAME", "produccion");
            jail.set_env("CORS_ORIGIN", "https://app.example.com");
            let cfg = Config::load().expect("failed to load config");
            assert_eq!(cfg.db_host, "db.interno");
            assert_eq!(cfg.db_name, "produccion");
            assert_eq!(cfg.cors_origin, "https://app.example.com");
            // untouched variables keep their defaults
            assert_eq!(cfg.db_user, "usuario");
            assert_eq!(cfg.db_password, "clave");
            Ok(())
        });
    }
}
