//! Tests for the dashboard coordinator: context selection, per-service
//! URL derivation, and status annotation over scripted networks.

use crate::common::{test_service, test_settings, ScriptedProbeClient};
use homedash::core::network::{NetworkKind, Prober, ServiceStatus};
use homedash::core::Dashboard;

fn dashboard(client: ScriptedProbeClient, services: Vec<homedash::config::Service>) -> Dashboard {
    Dashboard::new(test_settings(), services)
        .expect("dashboard construction")
        .with_prober(Prober::with_client(Box::new(client)))
}

#[tokio::test]
async fn only_home_reachable_selects_home_and_builds_port_url() {
    let client = ScriptedProbeClient::new()
        .with_status("http://local-a", 200)
        .with_status("http://homebox.lan:9000", 200);
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")]);

    let view = board.run(None).await;

    assert_eq!(view.available, vec![NetworkKind::Home]);
    assert_eq!(view.selected, Some(NetworkKind::Home));
    assert_eq!(view.services.len(), 1);
    assert_eq!(
        view.services[0].url,
        Some("http://homebox.lan:9000".to_string())
    );
    assert_eq!(view.services[0].status, ServiceStatus::Online);
}

#[tokio::test]
async fn no_network_reachable_renders_nothing_actionable() {
    let client = ScriptedProbeClient::new();
    let board = dashboard(
        client,
        vec![
            test_service("Portainer", 9000, "https://x/y"),
            test_service("Nextcloud", 10081, "https://cloud.example.net"),
        ],
    );

    let view = board.run(None).await;

    assert!(view.available.is_empty());
    assert_eq!(view.selected, None);
    for resolved in &view.services {
        assert_eq!(resolved.url, None);
        assert_eq!(resolved.status, ServiceStatus::Unknown);
    }
}

#[tokio::test]
async fn unreachable_endpoint_marks_service_offline() {
    // Home network answers its discovery probe but the service does not
    let client = ScriptedProbeClient::new().with_status("http://local-a", 200);
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")]);

    let view = board.run(None).await;

    assert_eq!(view.selected, Some(NetworkKind::Home));
    assert_eq!(
        view.services[0].url,
        Some("http://homebox.lan:9000".to_string())
    );
    assert_eq!(view.services[0].status, ServiceStatus::Offline);
}

#[tokio::test]
async fn statuses_are_independent_per_service() {
    let client = ScriptedProbeClient::new()
        .with_status("http://local-a", 200)
        .with_status("http://homebox.lan:9000", 200)
        .with_error("http://homebox.lan:10081", "connection refused");
    let board = dashboard(
        client,
        vec![
            test_service("Portainer", 9000, "https://x/y"),
            test_service("Nextcloud", 10081, "https://cloud.example.net"),
        ],
    );

    let view = board.run(None).await;

    assert_eq!(view.services[0].status, ServiceStatus::Online);
    assert_eq!(view.services[1].status, ServiceStatus::Offline);
}

#[tokio::test]
async fn forced_network_wins_when_reachable() {
    let client = ScriptedProbeClient::new()
        .with_status("http://local-a", 200)
        .with_status("https://public", 200)
        .with_status("https://x/y", 200);
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")]);

    let view = board.run(Some(NetworkKind::Remote)).await;

    assert_eq!(view.selected, Some(NetworkKind::Remote));
    assert_eq!(view.services[0].url, Some("https://x/y".to_string()));
    assert_eq!(view.services[0].status, ServiceStatus::Online);
}

#[tokio::test]
async fn forced_unreachable_network_degrades_to_no_selection() {
    let client = ScriptedProbeClient::new().with_status("http://local-a", 200);
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")]);

    let view = board.run(Some(NetworkKind::Remote)).await;

    assert_eq!(view.available, vec![NetworkKind::Home]);
    assert_eq!(view.selected, None);
    assert_eq!(view.services[0].url, None);
    assert_eq!(view.services[0].status, ServiceStatus::Unknown);
}

#[tokio::test]
async fn forced_unreachable_network_logs_a_warning() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("debug.log");

    let client = ScriptedProbeClient::new().with_status("http://local-a", 200);
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")])
        .with_logger(homedash::core::network::DebugLogger::enabled_at(log_path.clone()));

    board.run(Some(NetworkKind::Remote)).await;

    let content = std::fs::read_to_string(&log_path).expect("log file");
    let warning = content
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).expect("JSON line"))
        .find(|entry| entry["event"] == "forced_network_unreachable")
        .expect("warning event");
    assert_eq!(warning["level"], "ERROR");
    assert!(warning["message"].as_str().unwrap().contains("Remote"));
}

#[tokio::test]
async fn default_selection_prefers_candidate_order() {
    // Zima and Remote both answer; Zima comes first in the table
    let client = ScriptedProbeClient::new()
        .with_status("http://local-b", 200)
        .with_status("https://public", 200);
    let board = dashboard(client, vec![]);

    let view = board.run(None).await;

    assert_eq!(view.available, vec![NetworkKind::Zima, NetworkKind::Remote]);
    assert_eq!(view.selected, Some(NetworkKind::Zima));
}

#[tokio::test]
async fn discovery_and_status_probes_hit_different_urls() {
    let client = ScriptedProbeClient::new()
        .with_status("http://local-a", 200)
        .with_status("http://homebox.lan:9000", 200);
    let calls = client.call_log();
    let board = dashboard(client, vec![test_service("Portainer", 9000, "https://x/y")]);

    board.run(None).await;

    let calls = calls.lock().unwrap();
    assert!(calls.contains(&"http://local-a".to_string()));
    assert!(calls.contains(&"http://homebox.lan:9000".to_string()));
}
