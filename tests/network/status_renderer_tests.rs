//! Tests for terminal rendering of a settled dashboard view.

use crate::common::test_service;
use homedash::core::network::{
    DashboardView, NetworkKind, ResolvedService, ServiceStatus, StatusRenderer,
};

fn online(name: &str, port: u16, url: &str) -> ResolvedService {
    ResolvedService {
        service: test_service(name, port, "https://x/y"),
        url: Some(url.to_string()),
        status: ServiceStatus::Online,
    }
}

#[test]
fn renders_one_line_per_service_with_urls() {
    let view = DashboardView {
        available: vec![NetworkKind::Home],
        selected: Some(NetworkKind::Home),
        services: vec![
            online("Portainer", 9000, "http://homebox.lan:9000"),
            ResolvedService {
                service: test_service("Nextcloud", 10081, "https://cloud.example.net"),
                url: Some("http://homebox.lan:10081".to_string()),
                status: ServiceStatus::Offline,
            },
        ],
    };

    let output = StatusRenderer::new().render(&view);
    let lines: Vec<&str> = output.lines().collect();

    let portainer = lines
        .iter()
        .find(|line| line.contains("Portainer"))
        .expect("portainer line");
    assert!(portainer.contains("🟢"));
    assert!(portainer.contains("online"));
    assert!(portainer.contains("http://homebox.lan:9000"));

    let nextcloud = lines
        .iter()
        .find(|line| line.contains("Nextcloud"))
        .expect("nextcloud line");
    assert!(nextcloud.contains("🔴"));
    assert!(nextcloud.contains("offline"));
}

#[test]
fn non_actionable_service_shows_no_url() {
    let view = DashboardView {
        available: vec![],
        selected: None,
        services: vec![ResolvedService {
            service: test_service("Portainer", 9000, "https://x/y"),
            url: None,
            status: ServiceStatus::Unknown,
        }],
    };

    let output = StatusRenderer::new().render(&view);
    let line = output
        .lines()
        .find(|line| line.contains("Portainer"))
        .expect("portainer line");

    assert!(line.contains("⚪"));
    assert!(line.contains("unavailable"));
    assert!(!line.contains("http"));
}

#[test]
fn header_marks_the_selected_network() {
    let view = DashboardView {
        available: vec![NetworkKind::Home, NetworkKind::Remote],
        selected: Some(NetworkKind::Remote),
        services: vec![],
    };

    let output = StatusRenderer::new().render(&view);
    assert!(output.starts_with("Network: Home [Remote]"));
}

#[test]
fn header_reports_when_nothing_is_reachable() {
    let view = DashboardView {
        available: vec![],
        selected: None,
        services: vec![],
    };

    let output = StatusRenderer::new().render(&view);
    assert!(output.starts_with("Network: none reachable"));
}

#[test]
fn network_list_rendering() {
    let renderer = StatusRenderer::new();

    assert_eq!(renderer.render_networks(&[]), "Reachable networks: none");
    assert_eq!(
        renderer.render_networks(&[NetworkKind::Home, NetworkKind::Zima]),
        "Reachable networks: Home, Zima"
    );
}
