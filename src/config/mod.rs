//! Dashboard configuration: the services list (JSON) and probe settings (TOML).
//!
//! Both files are optional. A missing settings file yields `Settings::default()`
//! and a missing or unparseable services file falls back to the built-in
//! service list, with the failure logged rather than raised.

pub mod defaults;

use crate::core::network::debug_logger::get_debug_logger;
use crate::core::network::types::{DashboardError, NetworkCandidate, NetworkKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// One self-hosted service as declared in the services file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Short display glyph shown in front of the card
    pub icon: String,
    pub name: String,
    pub description: String,
    /// TCP port the service listens on inside the home network
    pub port: u16,
    /// Absolute URL reachable from outside the home network
    pub public_url: String,
}

/// Hosts substituted into local service URLs, one per LAN-side context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTable {
    pub home: String,
    pub zima: String,
}

/// Generic reachability URLs probed once at startup to discover which
/// network contexts are available. These test the network, not a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeTargets {
    pub home: String,
    pub zima: String,
    pub remote: String,
}

/// Probe settings, loaded from `config.toml` with defaults for every field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-attempt probe timeout in milliseconds
    pub timeout_ms: u32,
    /// Immediate retries after a failed probe attempt (no backoff)
    pub max_retries: u32,
    pub hosts: HostTable,
    pub probes: ProbeTargets,
}

impl Settings {
    /// Load settings from `path`, or the default location when None.
    ///
    /// A missing file is not an error: it yields `Settings::default()`.
    pub fn load(path: Option<PathBuf>) -> Result<Self, DashboardError> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            DashboardError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DashboardError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Default settings location: `~/.config/homedash/config.toml`
    pub fn default_path() -> Result<PathBuf, DashboardError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// The fixed candidate table probed by the network resolver.
    ///
    /// Order is significant: the first reachable entry becomes the default
    /// selection, so Home is preferred over Zima over Remote.
    pub fn candidates(&self) -> Vec<NetworkCandidate> {
        vec![
            NetworkCandidate {
                kind: NetworkKind::Home,
                probe_url: self.probes.home.clone(),
            },
            NetworkCandidate {
                kind: NetworkKind::Zima,
                probe_url: self.probes.zima.clone(),
            },
            NetworkCandidate {
                kind: NetworkKind::Remote,
                probe_url: self.probes.remote.clone(),
            },
        ]
    }
}

/// Default services location: `~/.config/homedash/services.json`
pub fn default_services_path() -> Result<PathBuf, DashboardError> {
    Ok(config_dir()?.join("services.json"))
}

/// Load the services list from a JSON file.
///
/// Entries with an unparseable `public_url` are kept (the Remote context
/// simply will not work for them) but flagged in the debug log.
pub fn load_services(path: &Path) -> Result<Vec<Service>, DashboardError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DashboardError::ConfigError(format!("failed to read {}: {}", path.display(), e))
    })?;

    let services: Vec<Service> = serde_json::from_str(&content).map_err(|e| {
        DashboardError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
    })?;

    let logger = get_debug_logger();
    for service in &services {
        if Url::parse(&service.public_url).is_err() {
            logger.error_sync(
                "Config",
                "invalid_public_url",
                &format!("{}: public_url {:?} is not a valid URL", service.name, service.public_url),
            );
        }
    }

    Ok(services)
}

/// Load the services list, falling back to the built-in defaults on any
/// failure. The failure is logged and reported on stderr, never raised.
pub fn load_services_or_default(path: &Path) -> Vec<Service> {
    match load_services(path) {
        Ok(services) => services,
        Err(err) => {
            eprintln!("Warning: {}; using built-in service list", err);
            get_debug_logger().config_fallback(&path.display().to_string(), &err.to_string());
            defaults::default_services()
        }
    }
}

fn config_dir() -> Result<PathBuf, DashboardError> {
    dirs::config_dir()
        .map(|dir| dir.join("homedash"))
        .ok_or(DashboardError::HomeDirNotFound)
}
