//! Tests for network context discovery: the resolver returns exactly the
//! reachable subset of the candidate table, in input order.

use crate::common::ScriptedProbeClient;
use homedash::core::network::{resolve_available, NetworkCandidate, NetworkKind, Prober};

fn candidates() -> Vec<NetworkCandidate> {
    vec![
        NetworkCandidate {
            kind: NetworkKind::Home,
            probe_url: "http://local-a".to_string(),
        },
        NetworkCandidate {
            kind: NetworkKind::Zima,
            probe_url: "http://local-b".to_string(),
        },
        NetworkCandidate {
            kind: NetworkKind::Remote,
            probe_url: "https://public".to_string(),
        },
    ]
}

#[tokio::test]
async fn returns_reachable_subset_in_input_order() {
    let client = ScriptedProbeClient::new()
        .with_status("http://local-a", 200)
        .with_error("http://local-b", "connection refused")
        .with_status("https://public", 200);
    let prober = Prober::with_client(Box::new(client));

    let available = resolve_available(&prober, &candidates(), 1000, 0).await;
    assert_eq!(available, vec![NetworkKind::Home, NetworkKind::Remote]);
}

#[tokio::test]
async fn only_first_candidate_reachable() {
    let client = ScriptedProbeClient::new().with_status("http://local-a", 200);
    let prober = Prober::with_client(Box::new(client));

    let available = resolve_available(&prober, &candidates(), 1000, 0).await;
    assert_eq!(available, vec![NetworkKind::Home]);
}

#[tokio::test]
async fn empty_when_nothing_answers() {
    let prober = Prober::with_client(Box::new(ScriptedProbeClient::new()));

    let available = resolve_available(&prober, &candidates(), 1000, 0).await;
    assert!(available.is_empty());
}

#[tokio::test]
async fn probes_every_candidate() {
    let client = ScriptedProbeClient::new().with_status("http://local-b", 200);
    let calls = client.call_log();
    let prober = Prober::with_client(Box::new(client));

    let available = resolve_available(&prober, &candidates(), 1000, 0).await;
    assert_eq!(available, vec![NetworkKind::Zima]);

    let calls = calls.lock().unwrap();
    assert!(calls.contains(&"http://local-a".to_string()));
    assert!(calls.contains(&"http://local-b".to_string()));
    assert!(calls.contains(&"https://public".to_string()));
}

#[tokio::test]
async fn repeats_probes_on_reinvocation() {
    // Nothing is cached between resolver runs
    let client = ScriptedProbeClient::new().with_status("http://local-a", 200);
    let calls = client.call_log();
    let prober = Prober::with_client(Box::new(client));

    resolve_available(&prober, &candidates(), 1000, 0).await;
    resolve_available(&prober, &candidates(), 1000, 0).await;

    assert_eq!(calls.lock().unwrap().len(), 6);
}
