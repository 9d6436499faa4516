//! Infrastructure layer for agency-site
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod content;
pub mod http;
pub mod relay;
pub mod verification;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileContentConfig, FileLoggingConfig, FilePaginationConfig,
    FilePrefillConfig, FileServerConfig, FileTurnstileConfig, FileWeb3FormsConfig,
};
pub use content::FsContentStore;
pub use http::build_http_client;
pub use relay::Web3FormsRelay;
pub use verification::TurnstileVerifier;
