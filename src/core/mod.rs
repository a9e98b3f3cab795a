pub mod dashboard;
pub mod network;

pub use dashboard::Dashboard;
