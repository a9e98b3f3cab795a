//! URL selection per network context.
//!
//! A hand-authored mapping from context to URL-construction rule: local
//! contexts combine a known host with the service port, the remote context
//! passes the service's public URL through untouched. The match on
//! `NetworkKind` is exhaustive, so a new context fails to compile until it
//! gets a rule here.

use crate::config::{HostTable, Service};
use crate::core::network::types::NetworkKind;

/// Derives the concrete URL for a service in a given network context
#[derive(Debug, Clone, PartialEq)]
pub struct UrlSelector {
    home_host: String,
    zima_host: String,
}

impl UrlSelector {
    pub fn new(hosts: &HostTable) -> Self {
        Self {
            home_host: hosts.home.clone(),
            zima_host: hosts.zima.clone(),
        }
    }

    /// Pure function of (context, service): identical inputs always yield
    /// the identical URL. No context means no URL, and the caller must
    /// treat the service as non-actionable.
    pub fn select_url(&self, context: Option<NetworkKind>, service: &Service) -> Option<String> {
        match context? {
            NetworkKind::Home => Some(format!("http://{}:{}", self.home_host, service.port)),
            NetworkKind::Zima => Some(format!("http://{}:{}", self.zima_host, service.port)),
            NetworkKind::Remote => Some(service.public_url.clone()),
        }
    }
}
