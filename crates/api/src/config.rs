use std::path::PathBuf;

use hourlypitch_core::idea::SeedStrategy;

use crate::auth::basic::AdminCredentials;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the admin password has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// SQLite URL (default: `sqlite://db/hourlypitch.db`).
    pub database_url: String,
    /// Directory holding `index.html`, `submit.html` and `admin.html`.
    pub template_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How the current idea is chosen at boot (default: `legacy`).
    pub seed_strategy: SeedStrategy,
    /// Secret checked by the admin Basic auth gate.
    pub admin: AdminCredentials,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `8080`                         |
    /// | `DATABASE_URL`         | `sqlite://db/hourlypitch.db`   |
    /// | `TEMPLATE_DIR`         | `templates`                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `SEED_STRATEGY`        | `legacy`                       |
    /// | `ADMIN_PASSWORD`       | required; falls back to `PASS` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = parse_or("PORT", lookup("PORT"), 8080)?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://db/hourlypitch.db".into());

        let template_dir =
            PathBuf::from(lookup("TEMPLATE_DIR").unwrap_or_else(|| "templates".into()));

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30)?;

        let seed_strategy = match lookup("SEED_STRATEGY") {
            Some(raw) => raw
                .parse::<SeedStrategy>()
                .map_err(|e| ConfigError::Invalid {
                    var: "SEED_STRATEGY",
                    reason: e.to_string(),
                })?,
            None => SeedStrategy::default(),
        };

        let password = lookup("ADMIN_PASSWORD")
            .or_else(|| lookup("PASS"))
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::Missing {
                var: "ADMIN_PASSWORD",
            })?;

        Ok(Self {
            host,
            port,
            database_url,
            template_dir,
            request_timeout_secs,
            seed_strategy,
            admin: AdminCredentials::new(password),
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ADMIN_PASSWORD", "hunter2")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite://db/hourlypitch.db");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.seed_strategy, SeedStrategy::Legacy);
    }

    #[test]
    fn test_password_required() {
        assert_matches!(
            load(&[]),
            Err(ConfigError::Missing {
                var: "ADMIN_PASSWORD"
            })
        );
        assert_matches!(
            load(&[("ADMIN_PASSWORD", "")]),
            Err(ConfigError::Missing { .. })
        );
    }

    #[test]
    fn test_legacy_pass_variable_accepted() {
        assert!(load(&[("PASS", "hunter2")]).is_ok());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = load(&[("ADMIN_PASSWORD", "x"), ("PORT", "eighty")]);
        assert_matches!(result, Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn test_seed_strategy_override() {
        let config = load(&[
            ("ADMIN_PASSWORD", "x"),
            ("SEED_STRATEGY", "most-recently-shown"),
        ])
        .unwrap();
        assert_eq!(config.seed_strategy, SeedStrategy::MostRecentlyShown);

        let result = load(&[("ADMIN_PASSWORD", "x"), ("SEED_STRATEGY", "newest")]);
        assert_matches!(
            result,
            Err(ConfigError::Invalid {
                var: "SEED_STRATEGY",
                ..
            })
        );
    }

    #[test]
    fn test_debug_output_hides_password() {
        let config = load(&[("ADMIN_PASSWORD", "very-secret-value")]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret-value"));
    }
}
