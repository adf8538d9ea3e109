//! Runtime settings and the assembled server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use backend::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;

/// Settings loaded from `ROSTER_*` environment variables, config files and
/// command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct AppSettings {
    /// Listen address; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one, contingents live in memory.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving; off unless set.
    pub run_migrations: Option<bool>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Set `Secure` on the session cookie; on unless set.
    pub cookie_secure: Option<bool>,
    /// Fall back to a random session key when the key file is unreadable;
    /// off unless set.
    pub allow_ephemeral_key: Option<bool>,
}

impl AppSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Whether migrations run at startup.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(false)
    }

    /// Whether the session cookie carries `Secure`.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Whether an unreadable key file may be replaced by a random key.
    pub fn allow_ephemeral_key(&self) -> bool {
        self.allow_ephemeral_key.unwrap_or(false)
    }

    /// Session key path, falling back to the mounted secret location.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_connection_timeout(Duration::from_secs(
                    self.pool_timeout_secs.unwrap_or(DEFAULT_POOL_TIMEOUT_SECS),
                )),
        )
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration backed by the in-memory store.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
        }
    }

    /// Persist contingents in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 8] = [
        "ROSTER_BIND_ADDR",
        "ROSTER_DATABASE_URL",
        "ROSTER_POOL_MAX_SIZE",
        "ROSTER_POOL_TIMEOUT_SECS",
        "ROSTER_RUN_MIGRATIONS",
        "ROSTER_SESSION_KEY_FILE",
        "ROSTER_COOKIE_SECURE",
        "ROSTER_ALLOW_EPHEMERAL_KEY",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> AppSettings {
        let _guard = lock_env(VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        }));
        AppSettings::load_from_iter([OsString::from("roster-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_select_memory_store() {
        let settings = load_with(&[]);

        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.session_key_file(), PathBuf::from(DEFAULT_SESSION_KEY_FILE));
        assert!(settings.pool_config().is_none());
        assert!(settings.cookie_secure());
        assert!(!settings.run_migrations());
        assert!(!settings.allow_ephemeral_key());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("ROSTER_BIND_ADDR", "127.0.0.1:9000"),
            ("ROSTER_DATABASE_URL", "postgres://roster@localhost/roster"),
            ("ROSTER_POOL_MAX_SIZE", "3"),
            ("ROSTER_RUN_MIGRATIONS", "true"),
            ("ROSTER_COOKIE_SECURE", "false"),
        ]);

        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            9000
        );
        let pool = settings.pool_config().expect("pool configured");
        assert_eq!(pool.database_url(), "postgres://roster@localhost/roster");
        assert!(settings.run_migrations());
        assert!(!settings.cookie_secure());
    }

    #[rstest]
    fn blank_database_url_keeps_memory_store() {
        let settings = load_with(&[("ROSTER_DATABASE_URL", "  ")]);
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let settings = load_with(&[("ROSTER_BIND_ADDR", "not-an-address")]);
        assert!(settings.bind_addr().is_err());
    }

    #[rstest]
    fn ephemeral_key_can_be_enabled_from_environment() {
        let settings = load_with(&[("ROSTER_ALLOW_EPHEMERAL_KEY", "true")]);
        assert!(settings.allow_ephemeral_key());
        assert!(settings.cookie_secure());
    }
}
