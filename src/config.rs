/// Site configuration
///
/// Loaded once at startup from a JSON file in the user's config directory:
/// - Linux: ~/.config/mend-site/config.json
/// - macOS: ~/Library/Application Support/mend-site/config.json
/// - Windows: %APPDATA%\mend-site\config.json
///
/// Every field has a default, so a missing file (or a partial one) is fine.
/// `MEND_SITE_CONFIG` points at a different file.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SiteError};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "MEND_SITE_CONFIG";

/// Spreadsheet-backed script that receives volunteer applications
pub const DEFAULT_APPLICATION_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzduAzI8yc_ytBRxbDzJkt-pxgTQab6I_hfMTpHNaw7DZarSGPH8SvM4_4LP2m73Loc/exec";

const DEFAULT_SLIDE_INTERVAL_MS: u64 = 6000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Where volunteer applications are POSTed
    pub application_endpoint: String,
    /// Where newsletter signups are POSTed (None = accept locally)
    pub newsletter_endpoint: Option<String>,
    /// Slideshow auto-advance period in milliseconds
    pub slide_interval_ms: u64,
    /// Directory holding `slideshow/` and `news/` images
    pub assets_dir: PathBuf,
    /// Timeout for each submission request
    pub request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            application_endpoint: DEFAULT_APPLICATION_ENDPOINT.to_string(),
            newsletter_endpoint: None,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            assets_dir: PathBuf::from("assets"),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SiteConfig {
    /// Load the config from the default location (or `MEND_SITE_CONFIG`)
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match path {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("⚠️  Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("📁 No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        log::info!("📁 Config loaded from {}", path.display());
        Ok(config)
    }

    /// Path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("mend-site");
        path.push("config.json");
        Some(path)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the rest of the app cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.slide_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "slide_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(SiteError::InvalidConfig(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        check_endpoint("application_endpoint", &self.application_endpoint)?;
        if let Some(endpoint) = &self.newsletter_endpoint {
            check_endpoint("newsletter_endpoint", endpoint)?;
        }

        Ok(())
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve an asset path relative to `assets_dir`
    pub fn asset(&self, relative: &Path) -> PathBuf {
        self.assets_dir.join(relative)
    }
}

fn check_endpoint(name: &str, endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| SiteError::InvalidConfig(format!("{name} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SiteError::InvalidConfig(format!(
            "{name} must use http or https, got {other}"
        ))),
    }
}
