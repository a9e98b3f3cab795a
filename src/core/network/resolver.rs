//! Network context discovery.
//!
//! Probes every entry of the fixed candidate table concurrently and keeps
//! the ones that answered. Runs once per invocation; nothing is cached, a
//! later call repeats every probe.

use crate::core::network::debug_logger::get_debug_logger;
use crate::core::network::prober::Prober;
use crate::core::network::types::{NetworkCandidate, NetworkKind};
use futures::future;

/// Probe all candidates concurrently and return the reachable subset,
/// preserving candidate order.
///
/// Every probe starts together and carries its own timeout; one slow
/// candidate delays the join but never cancels its siblings.
pub async fn resolve_available(
    prober: &Prober,
    candidates: &[NetworkCandidate],
    timeout_ms: u32,
    max_retries: u32,
) -> Vec<NetworkKind> {
    let probes = candidates
        .iter()
        .map(|candidate| prober.probe(&candidate.probe_url, timeout_ms, max_retries));
    let outcomes = future::join_all(probes).await;

    let available: Vec<NetworkKind> = candidates
        .iter()
        .zip(outcomes)
        .filter(|(_, reachable)| *reachable)
        .map(|(candidate, _)| candidate.kind)
        .collect();

    let labels: Vec<String> = available.iter().map(|kind| kind.to_string()).collect();
    get_debug_logger().resolver_summary(&labels, candidates.len());

    available
}
