//! Configuration file loading for agency-site
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Secret environment variables (`CF_TURNSTILE_SECRET_KEY`, `WEB3FORMS_*_FORM_KEY`)
//! 2. `AGENCY_SITE_*` environment overrides
//! 3. `--config <path>` specified file
//! 4. Project root: `./site.toml` or `./.site.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/agency-site/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_TURNSTILE_ENDPOINT, DEFAULT_WEB3FORMS_ENDPOINT, FileConfig, FileContentConfig,
    FileLoggingConfig, FilePaginationConfig, FilePrefillConfig, FileServerConfig,
    FileTurnstileConfig, FileWeb3FormsConfig,
};
pub use loader::{ConfigLoader, SECRET_ENV_VARS};
