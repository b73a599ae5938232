//! Service configuration.
//!
//! Sources, from lowest to highest priority:
//! 1. built-in defaults (listen on `0.0.0.0:4000`),
//! 2. an optional `catalog.{toml,json,yaml}` file in the directory named by `CATALOG_CONFIG_PATH`
//!    (the working directory if unset),
//! 3. environment variables prefixed with `CATALOG`, using `__` as separator, e.g.
//!    `CATALOG__SERVER__PORT=8080`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

/// Port listened on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 4000;

/// Environment variable naming the directory holding the configuration file.
const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG_PATH";
/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "CATALOG";
/// Separator between nested keys in environment variable names.
const ENV_SEPARATOR: &str = "__";
/// Name of the configuration file, without extension.
const FILE_NAME: &str = "catalog";

/// Key of the listening address.
const HOST_KEY: &str = "server.host";
/// Key of the listening port.
const PORT_KEY: &str = "server.port";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl AppConfig {
    /// Loads the configuration from the file and environment described in the module
    /// documentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed, or if a value has
    /// the wrong type.
    #[inline]
    pub fn load() -> Result<Self, ConfigError> {
        let dir = env::var(CONFIG_PATH_ENV).map_or_else(|_| PathBuf::from("."), PathBuf::from);
        Self::load_from(&dir, Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads the configuration using the file in `dir` and the given environment source.
    fn load_from(dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default(HOST_KEY, Ipv4Addr::UNSPECIFIED.to_string())?
            .set_default(PORT_KEY, i64::from(DEFAULT_PORT))?
            .add_source(File::from(dir.join(FILE_NAME)).required(false))
            .add_source(environment.separator(ENV_SEPARATOR).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// The socket address to listen on.
    #[inline]
    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}
