use std::collections::HashMap;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Hardcoded configuration - no environment variables needed
const LOG_ROTATION_SIZE_MB: u64 = 4;
const MAX_ARCHIVES: usize = 3;
const ROTATION_CHECK_INTERVAL: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LogEntry {
    timestamp: String,                          // ISO-8601 with timezone
    level: String,                              // DEBUG, ERROR, NETWORK
    component: String,                          // Component name
    event: String,                              // Event type
    message: String,                            // Human readable message
    correlation_id: Option<String>,             // For tracking multi-step operations
    fields: HashMap<String, serde_json::Value>, // Structured data
}

struct RotatingLogger {
    log_path: PathBuf,
    write_count: AtomicU32,
}

impl RotatingLogger {
    fn new(log_path: PathBuf) -> Self {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        Self {
            log_path,
            write_count: AtomicU32::new(0),
        }
    }

    fn write_with_rotation(&self, json_line: &str) -> Result<(), std::io::Error> {
        // Check for rotation every ROTATION_CHECK_INTERVAL writes
        if self.write_count.fetch_add(1, Ordering::Relaxed) % ROTATION_CHECK_INTERVAL == 0 {
            let _ = self.rotate_if_needed(); // Don't let rotation errors stop logging
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        writeln!(file, "{}", json_line)?;
        Ok(())
    }

    fn rotate_if_needed(&self) -> Result<(), std::io::Error> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = std::fs::metadata(&self.log_path)?;
        if metadata.len() < LOG_ROTATION_SIZE_MB * 1024 * 1024 {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let base_name = match self.log_path.file_stem().and_then(|s| s.to_str()) {
            Some(name) => name.to_string(),
            None => return Ok(()),
        };
        let parent = match self.log_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Ok(()),
        };

        let archive_path = parent.join(format!("{}.{}.log", base_name, timestamp));
        std::fs::rename(&self.log_path, &archive_path)?;

        let _ = self.cleanup_old_archives(&parent, &base_name); // Ignore cleanup errors

        Ok(())
    }

    fn cleanup_old_archives(&self, log_dir: &std::path::Path, base_name: &str) -> Result<(), std::io::Error> {
        let mut archives = Vec::new();
        for entry in std::fs::read_dir(log_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with(&format!("{}.", base_name))
                && name.ends_with(".log")
                && entry.path() != self.log_path
            {
                archives.push((entry.path(), entry.metadata()?.modified()?));
            }
        }

        // Keep only the most recent MAX_ARCHIVES
        archives.sort_by_key(|(_, modified)| *modified);
        if archives.len() > MAX_ARCHIVES {
            let to_remove = archives.len() - MAX_ARCHIVES;
            for (path, _) in archives.iter().take(to_remove) {
                let _ = std::fs::remove_file(path);
            }
        }

        Ok(())
    }
}

/// Env-gated JSONL debug logger for probe lifecycle tracking.
///
/// Disabled unless `HOMEDASH_DEBUG` is set to a truthy value, in which
/// case entries go to `~/.config/homedash/homedash-debug.log` with
/// size-capped rotation. Logging failures are swallowed: the dashboard
/// must never crash because its debug log is unwritable.
///
/// Clones share the same log file and session id, so entries written
/// anywhere in one invocation correlate under one `session_id`.
#[derive(Clone)]
pub struct DebugLogger {
    enabled: bool,
    rotating_logger: Option<Arc<Mutex<RotatingLogger>>>,
    session_id: String, // Correlation ID for this invocation
}

impl DebugLogger {
    pub fn new() -> Self {
        let enabled = Self::parse_debug_enabled();
        Self::build(enabled, Self::get_log_path())
    }

    /// Construct an always-enabled logger at an explicit path (for testing)
    pub fn enabled_at(log_path: PathBuf) -> Self {
        Self::build(true, log_path)
    }

    fn build(enabled: bool, log_path: PathBuf) -> Self {
        let session_id = Uuid::new_v4().to_string()[..8].to_string();

        let rotating_logger = if enabled {
            Some(Arc::new(Mutex::new(RotatingLogger::new(log_path))))
        } else {
            None
        };

        Self {
            enabled,
            rotating_logger,
            session_id,
        }
    }

    /// Parse debug enabled status from the HOMEDASH_DEBUG environment variable only
    /// Supports: true/false, 1/0, yes/no, on/off (case insensitive)
    fn parse_debug_enabled() -> bool {
        env::var("HOMEDASH_DEBUG")
            .map(|v| {
                matches!(
                    v.trim().to_lowercase().as_str(),
                    "true" | "1" | "yes" | "on"
                )
            })
            .unwrap_or(false)
    }

    fn get_log_path() -> PathBuf {
        let mut log_path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        log_path.push("homedash");
        log_path.push("homedash-debug.log");
        log_path
    }

    /// Core synchronous logging method with JSON Lines format
    fn log_sync(
        &self,
        level: &str,
        component: &str,
        event: &str,
        message: &str,
        correlation_id: Option<String>,
        fields: HashMap<String, serde_json::Value>,
    ) {
        if !self.enabled {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            level: level.to_string(),
            component: component.to_string(),
            event: event.to_string(),
            message: message.to_string(),
            correlation_id: correlation_id.or_else(|| Some(self.session_id.clone())),
            fields,
        };

        if let Some(logger) = &self.rotating_logger {
            if let Ok(logger) = logger.lock() {
                if let Ok(json_line) = serde_json::to_string(&entry) {
                    let _ = logger.write_with_rotation(&json_line); // Don't crash on logging errors
                }
            }
        }
    }

    pub fn debug_sync(&self, component: &str, event: &str, message: &str) {
        self.log_sync("DEBUG", component, event, message, None, HashMap::new());
    }

    pub fn error_sync(&self, component: &str, event: &str, message: &str) {
        self.log_sync("ERROR", component, event, message, None, HashMap::new());
    }

    // Typed methods for probe lifecycle events

    pub fn probe_start(&self, url: &str, timeout_ms: u64, correlation_id: String) {
        let mut fields = HashMap::new();
        fields.insert("url".to_string(), serde_json::Value::String(url.to_string()));
        fields.insert("timeout_ms".to_string(), serde_json::Value::Number(timeout_ms.into()));

        self.log_sync(
            "NETWORK",
            "Prober",
            "probe_start",
            &format!("Starting probe of {}", url),
            Some(correlation_id),
            fields,
        );
    }

    pub fn probe_end(&self, url: &str, reachable: bool, attempts: u32, correlation_id: String) {
        let mut fields = HashMap::new();
        fields.insert("url".to_string(), serde_json::Value::String(url.to_string()));
        fields.insert("reachable".to_string(), serde_json::Value::Bool(reachable));
        fields.insert("attempts".to_string(), serde_json::Value::Number(attempts.into()));

        self.log_sync(
            "NETWORK",
            "Prober",
            "probe_end",
            &format!(
                "Probe of {} finished: {} after {} attempt(s)",
                url,
                if reachable { "reachable" } else { "unreachable" },
                attempts
            ),
            Some(correlation_id),
            fields,
        );
    }

    pub fn resolver_summary(&self, available: &[String], candidate_count: usize) {
        let mut fields = HashMap::new();
        fields.insert(
            "available".to_string(),
            serde_json::Value::Array(
                available
                    .iter()
                    .map(|kind| serde_json::Value::String(kind.clone()))
                    .collect(),
            ),
        );
        fields.insert(
            "candidate_count".to_string(),
            serde_json::Value::Number(candidate_count.into()),
        );

        self.log_sync(
            "NETWORK",
            "NetworkResolver",
            "resolve_complete",
            &format!("{} of {} candidates reachable", available.len(), candidate_count),
            None,
            fields,
        );
    }

    pub fn config_fallback(&self, path: &str, reason: &str) {
        let mut fields = HashMap::new();
        fields.insert("path".to_string(), serde_json::Value::String(path.to_string()));
        fields.insert("reason".to_string(), serde_json::Value::String(reason.to_string()));

        self.log_sync(
            "ERROR",
            "Config",
            "services_fallback",
            &format!("Falling back to built-in services: {}", reason),
            None,
            fields,
        );
    }

    pub fn render_summary(&self, selected: Option<&str>, online: usize, total: usize) {
        let mut fields = HashMap::new();
        fields.insert(
            "selected".to_string(),
            match selected {
                Some(kind) => serde_json::Value::String(kind.to_string()),
                None => serde_json::Value::Null,
            },
        );
        fields.insert("online".to_string(), serde_json::Value::Number(online.into()));
        fields.insert("total".to_string(), serde_json::Value::Number(total.into()));

        self.log_sync(
            "NETWORK",
            "StatusRenderer",
            "render_complete",
            &format!("Rendered {} services, {} online", total, online),
            None,
            fields,
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get_session_id(&self) -> &str {
        &self.session_id
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

// Factory function: every call site gets a clone of one process-wide
// logger, so all entries of an invocation share a session id
pub fn get_debug_logger() -> DebugLogger {
    static DEBUG_LOGGER: std::sync::OnceLock<DebugLogger> = std::sync::OnceLock::new();
    DEBUG_LOGGER.get_or_init(DebugLogger::new).clone()
}
