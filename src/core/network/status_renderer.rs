// Terminal rendering for the resolved dashboard view
use crate::core::network::debug_logger::get_debug_logger;
use crate::core::network::types::{DashboardView, NetworkKind, ResolvedService, ServiceStatus};

/// Renders a settled `DashboardView` as plain terminal text.
///
/// Emoji: 🟢/🔴/⚪ map to online/offline/unavailable. A service URL is
/// printed only when the service is actionable; unavailable services get
/// no URL so there is nothing misleading to click or copy.
pub struct StatusRenderer;

impl StatusRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full dashboard: network header plus one line per service
    pub fn render(&self, view: &DashboardView) -> String {
        let mut lines = vec![self.render_header(view)];
        lines.push(String::new());

        for resolved in &view.services {
            lines.push(self.render_service(resolved));
        }

        let online = view
            .services
            .iter()
            .filter(|s| s.status == ServiceStatus::Online)
            .count();
        let selected = view.selected.map(|kind| kind.to_string());
        get_debug_logger().render_summary(selected.as_deref(), online, view.services.len());

        lines.join("\n")
    }

    /// Render just the reachable-network list (for --list-networks)
    pub fn render_networks(&self, available: &[NetworkKind]) -> String {
        if available.is_empty() {
            "Reachable networks: none".to_string()
        } else {
            let labels: Vec<String> = available.iter().map(|kind| kind.to_string()).collect();
            format!("Reachable networks: {}", labels.join(", "))
        }
    }

    fn render_header(&self, view: &DashboardView) -> String {
        match view.selected {
            Some(selected) => {
                let labels: Vec<String> = view
                    .available
                    .iter()
                    .map(|kind| {
                        if *kind == selected {
                            format!("[{}]", kind)
                        } else {
                            kind.to_string()
                        }
                    })
                    .collect();
                format!("Network: {}", labels.join(" "))
            }
            None => "Network: none reachable".to_string(),
        }
    }

    fn render_service(&self, resolved: &ResolvedService) -> String {
        let indicator = match resolved.status {
            ServiceStatus::Online => "🟢",
            ServiceStatus::Offline => "🔴",
            ServiceStatus::Unknown => "⚪",
        };

        let base = format!(
            "{} {:<14} {:<38} {} {}",
            resolved.service.icon,
            resolved.service.name,
            resolved.service.description,
            indicator,
            resolved.status
        );

        match &resolved.url {
            Some(url) => format!("{}  {}", base, url),
            None => base,
        }
    }
}

impl Default for StatusRenderer {
    fn default() -> Self {
        Self::new()
    }
}
