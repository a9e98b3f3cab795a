//! Dashboard - coordination of network discovery and service resolution
//!
//! The coordinator owns the service list and the probe settings for one
//! invocation; nothing in the crate mutates shared state at a distance.
//! Each run performs the same fixed sequence:
//!
//! 1. Probe the candidate table concurrently to find reachable networks
//! 2. Pick a context: the forced one if reachable, else the first reachable
//! 3. Derive every service URL for that context via `UrlSelector`
//! 4. Probe every derived URL concurrently and join before building the view
//!
//! Discovery probes and status probes are separate: the former test a
//! network's generic reachability URL, the latter test the exact service
//! endpoint the user would open. The returned `DashboardView` is immutable
//! and only produced after all probes have settled, so a render pass never
//! observes a half-updated service list.

use crate::config::{Service, Settings};
use crate::core::network::debug_logger::{get_debug_logger, DebugLogger};
use crate::core::network::prober::Prober;
use crate::core::network::resolver::resolve_available;
use crate::core::network::selector::UrlSelector;
use crate::core::network::types::{
    DashboardError, DashboardView, NetworkKind, ResolvedService, ServiceStatus,
};
use futures::future;

/// Coordinates one resolution pass over the configured services
pub struct Dashboard {
    settings: Settings,
    services: Vec<Service>,
    selector: UrlSelector,
    prober: Prober,
    logger: DebugLogger,
}

impl Dashboard {
    /// Create a Dashboard owning the given settings and service list
    pub fn new(settings: Settings, services: Vec<Service>) -> Result<Self, DashboardError> {
        let selector = UrlSelector::new(&settings.hosts);
        Ok(Self {
            settings,
            services,
            selector,
            prober: Prober::new()?,
            logger: get_debug_logger(),
        })
    }

    /// Replace the prober (for testing with a scripted client)
    pub fn with_prober(mut self, prober: Prober) -> Self {
        self.prober = prober;
        self
    }

    /// Replace the logger (for testing with an explicit log path)
    pub fn with_logger(mut self, logger: DebugLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Probe the candidate table and return the reachable networks in
    /// candidate order. Re-invocation repeats every probe.
    pub async fn resolve_networks(&self) -> Vec<NetworkKind> {
        resolve_available(
            &self.prober,
            &self.settings.candidates(),
            self.settings.timeout_ms,
            self.settings.max_retries,
        )
        .await
    }

    /// Pick the context to derive URLs from.
    ///
    /// A forced kind wins only when it is actually reachable; forcing an
    /// unreachable network degrades to no selection rather than producing
    /// URLs that cannot work.
    pub fn choose_context(
        &self,
        available: &[NetworkKind],
        forced: Option<NetworkKind>,
    ) -> Option<NetworkKind> {
        match forced {
            Some(kind) if available.contains(&kind) => Some(kind),
            Some(kind) => {
                eprintln!("Warning: network {} is not reachable", kind);
                self.logger.error_sync(
                    "Dashboard",
                    "forced_network_unreachable",
                    &format!("{} was requested but did not answer its probe", kind),
                );
                None
            }
            None => available.first().copied(),
        }
    }

    /// Derive a URL per service for the selected context and probe them
    /// all concurrently. Statuses are only assigned after every probe has
    /// settled. Services without a derivable URL stay `Unknown`.
    pub async fn resolve_services(&self, selected: Option<NetworkKind>) -> Vec<ResolvedService> {
        let timeout_ms = self.settings.timeout_ms;
        let max_retries = self.settings.max_retries;

        let probes = self.services.iter().map(|service| {
            let url = self.selector.select_url(selected, service);
            async move {
                match url {
                    Some(url) => {
                        let status = if self.prober.probe(&url, timeout_ms, max_retries).await {
                            ServiceStatus::Online
                        } else {
                            ServiceStatus::Offline
                        };
                        (Some(url), status)
                    }
                    None => (None, ServiceStatus::Unknown),
                }
            }
        });
        let outcomes = future::join_all(probes).await;

        self.services
            .iter()
            .cloned()
            .zip(outcomes)
            .map(|(service, (url, status))| ResolvedService { service, url, status })
            .collect()
    }

    /// One full resolution pass: discovery, selection, status annotation
    pub async fn run(&self, forced: Option<NetworkKind>) -> DashboardView {
        let available = self.resolve_networks().await;
        let selected = self.choose_context(&available, forced);
        let services = self.resolve_services(selected).await;

        DashboardView {
            available,
            selected,
            services,
        }
    }
}
