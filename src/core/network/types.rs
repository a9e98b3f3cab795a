// Core types for network context resolution and service probing
use crate::config::Service;

/// Closed set of network contexts the dashboard knows how to reach.
///
/// Each variant carries its own URL-construction rule in `UrlSelector`;
/// adding a context means adding a variant and the compiler points at
/// every match that needs a new rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
pub enum NetworkKind {
    /// Home LAN, services reachable on the local host by port
    Home,
    /// Zima appliance address on the LAN (secondary gateway)
    Zima,
    /// Outside the home network, services reachable via their public URLs
    Remote,
}

impl std::fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkKind::Home => write!(f, "Home"),
            NetworkKind::Zima => write!(f, "Zima"),
            NetworkKind::Remote => write!(f, "Remote"),
        }
    }
}

/// One entry of the fixed candidate table probed at startup
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkCandidate {
    pub kind: NetworkKind,
    /// Generic reachability URL for this network, not a service endpoint
    pub probe_url: String,
}

/// Per-service probe verdict for a single render pass
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub enum ServiceStatus {
    /// The resolved URL answered the status probe
    Online,
    /// The resolved URL did not answer within the timeout budget
    Offline,
    /// No URL could be derived, service is not actionable
    #[default]
    Unknown,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Online => write!(f, "online"),
            ServiceStatus::Offline => write!(f, "offline"),
            ServiceStatus::Unknown => write!(f, "unavailable"),
        }
    }
}

/// A service joined with its resolved URL and probe verdict
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedService {
    pub service: Service,
    /// Concrete URL for the chosen context, None when not actionable
    pub url: Option<String>,
    pub status: ServiceStatus,
}

/// Immutable outcome of one full resolution pass, handed to the renderer
/// only after every probe has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Reachable networks in candidate-table order
    pub available: Vec<NetworkKind>,
    /// Context the service URLs were derived from, if any
    pub selected: Option<NetworkKind>,
    pub services: Vec<ResolvedService>,
}

/// Errors surfaced by dashboard setup and configuration loading.
///
/// Probing deliberately has no error variant: a probe that fails in any
/// way is reported as unreachable, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP client error: {0}")]
    HttpError(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("home directory not found")]
    HomeDirNotFound,
}
