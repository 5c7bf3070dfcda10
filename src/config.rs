//! Application configuration loaded from environment variables.
//!
//! [`Config`] is read once at startup. [`BuildInfo`] is read on every
//! request so that a changed `APP_VERSION` or `BUILD_TIMESTAMP` shows up
//! without a restart.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Metrics ===
    /// Port for the Prometheus scrape listener. Unset disables the exporter.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        self.host_ip()?;

        if self.metrics_port == Some(self.port) {
            return Err(ServiceError::InvalidConfig(format!(
                "METRICS_PORT must differ from PORT ({})",
                self.port
            )));
        }

        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.host_ip()?, self.port))
    }

    /// Address of the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        match self.metrics_port {
            Some(port) => Ok(Some(SocketAddr::new(self.host_ip()?, port))),
            None => Ok(None),
        }
    }

    fn host_ip(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("HOST must be an IP address, got {:?}", self.host))
        })
    }
}

/// Variable holding the deployed application version.
pub const APP_VERSION_VAR: &str = "APP_VERSION";
/// Variable holding the build time of the deployed artifact.
pub const BUILD_TIMESTAMP_VAR: &str = "BUILD_TIMESTAMP";

/// Build metadata reported by the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Deployed application version (`APP_VERSION`).
    pub app_version: String,

    /// When the deployed artifact was built (`BUILD_TIMESTAMP`).
    pub build_timestamp: String,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_build_timestamp() -> String {
    "unknown".to_string()
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            build_timestamp: default_build_timestamp(),
        }
    }
}

impl BuildInfo {
    /// Read build metadata from the current process environment.
    ///
    /// Each variable is looked up by its exact name and falls back to its
    /// own default when unset or not valid UTF-8.
    pub fn from_env() -> Self {
        Self {
            app_version: env_var(APP_VERSION_VAR).unwrap_or_else(default_app_version),
            build_timestamp: env_var(BUILD_TIMESTAMP_VAR).unwrap_or_else(default_build_timestamp),
        }
    }

    /// Read build metadata from an explicit set of variables.
    ///
    /// Names match case-sensitively; anything else in `vars` is ignored.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut info = Self::default();
        for (key, value) in vars {
            match key.as_str() {
                APP_VERSION_VAR => info.app_version = value,
                BUILD_TIMESTAMP_VAR => info.build_timestamp = value,
                _ => {}
            }
        }
        info
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var_os(key)?.into_string().ok()
}
