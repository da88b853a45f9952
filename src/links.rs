/// External links: the journal, social pages, full articles, videos
use std::process::Command;

use crate::error::{Result, SiteError};

pub const JOURNAL_URL: &str = "https://surface.syr.edu/mend/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/ProjectMendSU";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/projectmend/";

/// Program and arguments that hand `url` to the system browser
pub fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        // Empty title argument so `start` doesn't treat the URL as one
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.into()])
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.into()])
    } else {
        ("xdg-open", vec![url.into()])
    }
}

/// Open `url` in the system browser without waiting for it
pub fn open(url: &str) -> Result<()> {
    let (program, args) = browser_command(url);

    Command::new(program)
        .args(&args)
        .spawn()
        .map_err(|source| SiteError::OpenLink {
            url: url.to_string(),
            source,
        })?;

    log::info!("🔗 Opened {}", url);
    Ok(())
}
