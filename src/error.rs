/// Error types for the site
///
/// Everything that can fail outside of form validation ends up here:
/// loading the config file, talking to the submission endpoints,
/// reading attachments and opening external links.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `SiteConfig`
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A config value is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Transport-level failure (DNS, refused connection, timeout, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },

    /// An attachment could not be read
    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Launching the system browser failed
    #[error("failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
