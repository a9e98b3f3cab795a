pub mod debug_logger;
pub mod prober;
pub mod resolver;
pub mod selector;
pub mod status_renderer;
pub mod types;

// Re-export commonly used items
pub use debug_logger::{get_debug_logger, DebugLogger};
pub use prober::{is_reachable_status, ProbeClient, Prober};
pub use resolver::resolve_available;
pub use selector::UrlSelector;
pub use status_renderer::StatusRenderer;
pub use types::*;
