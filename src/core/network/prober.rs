/*!
Time-bounded reachability probing.

A probe is a header-only HTTP request against a single URL with a hard
per-attempt timeout and a fixed number of immediate retries. The outcome
is a plain boolean: from the caller's perspective probing cannot fail,
it can only report unreachable.

## Reachability policy

The probe inspects the response status: 2xx and 3xx count as reachable,
4xx/5xx and transport-level failures do not. Redirects are never followed,
so a 3xx still proves that the target itself answered. This means
"reachable" does not guarantee the target serves valid content, only that
something at that address responded.

## Dependencies

- `isahc`: HTTP client with per-request timeout support
- `tokio`: async runtime for non-blocking probe execution
*/

use crate::core::network::debug_logger::get_debug_logger;
use crate::core::network::types::DashboardError;
#[cfg(feature = "network-probing")]
use std::time::Duration;

#[cfg(feature = "network-probing")]
use isahc::config::{Configurable, RedirectPolicy};
#[cfg(feature = "network-probing")]
use isahc::{HttpClient, Request};

/// HTTP client abstraction for dependency injection and testing.
///
/// Implementations issue a header-only request and report the status code
/// of whatever answered, or an error string when nothing did in time.
#[async_trait::async_trait]
pub trait ProbeClient: Send + Sync {
    /// Execute a HEAD request, bounded by `timeout_ms`, without following
    /// redirects. Returns the HTTP status code on any response.
    async fn head(&self, url: String, timeout_ms: u32) -> Result<u16, String>;
}

/// Production probe client implementation using isahc
#[cfg(feature = "network-probing")]
pub struct IsahcProbeClient {
    client: HttpClient,
}

#[cfg(feature = "network-probing")]
#[async_trait::async_trait]
impl ProbeClient for IsahcProbeClient {
    async fn head(&self, url: String, timeout_ms: u32) -> Result<u16, String> {
        let request = Request::head(&url)
            .timeout(Duration::from_millis(timeout_ms as u64))
            .redirect_policy(RedirectPolicy::None)
            .header("User-Agent", concat!("homedash/", env!("CARGO_PKG_VERSION")))
            .body(())
            .map_err(|e| format!("probe request creation failed: {}", e))?;

        let response = self
            .client
            .send_async(request)
            .await
            .map_err(|e| format!("probe request failed: {}", e))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(feature = "network-probing")]
impl IsahcProbeClient {
    pub fn new() -> Result<Self, DashboardError> {
        let client = HttpClient::builder()
            .redirect_policy(RedirectPolicy::None)
            .build()
            .map_err(|e| DashboardError::HttpError(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

/// Stand-in client when the network-probing feature is disabled
#[cfg(not(feature = "network-probing"))]
#[derive(Default)]
pub struct MockProbeClient;

#[cfg(not(feature = "network-probing"))]
#[async_trait::async_trait]
impl ProbeClient for MockProbeClient {
    async fn head(&self, _url: String, _timeout_ms: u32) -> Result<u16, String> {
        Ok(200)
    }
}

/// Whether a response status counts as reachable (2xx and 3xx)
pub fn is_reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Reachability prober with bounded immediate retries.
///
/// Holds no state between calls; probing different URLs concurrently
/// through a shared `Prober` is safe.
pub struct Prober {
    client: Box<dyn ProbeClient>,
}

impl Prober {
    /// Create a Prober with the production HTTP client
    pub fn new() -> Result<Self, DashboardError> {
        #[cfg(feature = "network-probing")]
        let client: Box<dyn ProbeClient> = Box::new(IsahcProbeClient::new()?);
        #[cfg(not(feature = "network-probing"))]
        let client: Box<dyn ProbeClient> = Box::new(MockProbeClient);

        Ok(Self { client })
    }

    /// Create a Prober with a custom client (for testing)
    pub fn with_client(client: Box<dyn ProbeClient>) -> Self {
        Self { client }
    }

    /// One probe attempt. Carries its own wall-clock bound in addition to
    /// the client's request timeout, so the budget holds even for a client
    /// that ignores `timeout_ms`.
    async fn attempt(&self, url: &str, timeout_ms: u32) -> Result<u16, String> {
        #[cfg(feature = "network-probing")]
        {
            return match tokio::time::timeout(
                Duration::from_millis(timeout_ms as u64),
                self.client.head(url.to_string(), timeout_ms),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(format!("no response within {}ms", timeout_ms)),
            };
        }
        #[cfg(not(feature = "network-probing"))]
        {
            return self.client.head(url.to_string(), timeout_ms).await;
        }
    }

    /// Probe `url` once, retrying up to `max_retries` additional times on
    /// any failure. Retries are immediate. Total blocking time is bounded
    /// by `timeout_ms * (max_retries + 1)`.
    pub async fn probe(&self, url: &str, timeout_ms: u32, max_retries: u32) -> bool {
        let logger = get_debug_logger();
        let probe_id = format!("probe_{}", uuid::Uuid::new_v4());
        logger.probe_start(url, timeout_ms as u64, probe_id.clone());

        let attempts = max_retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.attempt(url, timeout_ms).await {
                Ok(status) if is_reachable_status(status) => {
                    logger.probe_end(url, true, attempt, probe_id.clone());
                    return true;
                }
                Ok(status) => {
                    logger.debug_sync(
                        "Prober",
                        "probe_attempt",
                        &format!("attempt {}/{} for {}: HTTP {}", attempt, attempts, url, status),
                    );
                }
                Err(err) => {
                    logger.debug_sync(
                        "Prober",
                        "probe_attempt",
                        &format!("attempt {}/{} for {}: {}", attempt, attempts, url, err),
                    );
                }
            }
        }

        logger.probe_end(url, false, attempts, probe_id);
        false
    }
}
