//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "agency-site";
const PROJECT_FILES: [&str; 2] = ["site.toml", ".site.toml"];

/// Prefix for generic overrides, e.g. `AGENCY_SITE_SERVER__BIND`.
pub const ENV_PREFIX: &str = "AGENCY_SITE_";

/// Secret environment variables and the config keys they fill.
pub const SECRET_ENV_VARS: [(&str, &str); 4] = [
    ("CF_TURNSTILE_SECRET_KEY", "turnstile.secret_key"),
    ("WEB3FORMS_CONTACT_FORM_KEY", "web3forms.contact_key"),
    ("WEB3FORMS_SERVICE_REQUEST_FORM_KEY", "web3forms.service_request_key"),
    ("WEB3FORMS_SOLUTION_REQUEST_FORM_KEY", "web3forms.solution_request_key"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Secret environment variables (`CF_TURNSTILE_SECRET_KEY`, `WEB3FORMS_*_FORM_KEY`)
    /// 2. `AGENCY_SITE_*` environment overrides
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./site.toml` or `./.site.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/agency-site/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load only default configuration plus secrets (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    fn with_env(mut figment: Figment) -> Figment {
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        for (var, key) in SECRET_ENV_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/agency-site/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for (var, _) in SECRET_ENV_VARS {
            let state = if std::env::var(var).is_ok_and(|v| !v.trim().is_empty()) {
                "[SET  ]"
            } else {
                "[     ]"
            };
            println!("  {} Env:     {}", state, var);
        }

        if let Some(path) = explicit {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./site.toml or ./.site.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_global_config_path_names_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_project_file_and_secret_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "site.toml",
                r#"
[server]
bind = "0.0.0.0:8000"

[web3forms]
contact_key = "from-file"
"#,
            )?;
            jail.set_env("WEB3FORMS_CONTACT_FORM_KEY", "from-env");
            jail.set_env("CF_TURNSTILE_SECRET_KEY", "turnstile-secret");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.server.bind, "0.0.0.0:8000");
            assert_eq!(config.web3forms.contact_key.as_deref(), Some("from-env"));
            assert_eq!(config.turnstile.secret_key.as_deref(), Some("turnstile-secret"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("site.toml", "[pagination]\nitems_per_page = 3\n")?;
            jail.create_file("custom.toml", "[pagination]\nitems_per_page = 9\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| e.to_string())?;
            assert_eq!(config.pagination.items_per_page, 9);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_override() {
        Jail::expect_with(|jail| {
            jail.set_env("AGENCY_SITE_PREFILL__TTL_MINUTES", "45");
            let config = ConfigLoader::load_defaults().map_err(|e| e.to_string())?;
            assert_eq!(config.prefill.ttl_minutes, 45);
            Ok(())
        });
    }
}
