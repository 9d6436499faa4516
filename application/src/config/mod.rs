//! Application-level configuration.
//!
//! - [`ContentParams`]: draft visibility, sort orders and page size
//! - [`SiteConfig`]: container handed out by the binary

pub mod content_params;
pub mod site_config;

pub use content_params::ContentParams;
pub use site_config::{DEFAULT_BIND, ServerParams, SiteConfig};
