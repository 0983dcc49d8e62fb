pub mod launcher;
pub mod net;

// Re-exports for convenience
pub use launcher::{open_url, LaunchError};
pub use net::{default_http_client, NetError};
