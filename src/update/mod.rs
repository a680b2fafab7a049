//! Version check and self-update
//!
//! The stored version marker is the commit sha of the installed build. It is
//! compared against the head of the upstream repository; updating reinstalls
//! from git with `cargo install`.

mod installer;
mod source;

pub use installer::{CargoInstaller, Installer};
pub use source::{GitHubSource, VersionSource};

use std::io::Write;

use log::debug;

use crate::config::{Config, ConfigStore};
use crate::error::{DockpickError, Result};
use crate::prompt::{LineSource, Prompter};

/// Upstream repository in `owner/repo` form
pub const REPO: &str = "dockpick/dockpick";

/// Result of comparing the stored version with the latest one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    /// A different build is available
    Available(String),
    /// The latest version could not be determined
    Unknown,
}

/// Compare the stored version against the latest published one.
///
/// Fetch failures are not errors here; they only suppress the notice.
pub fn check(config: &Config, source: &dyn VersionSource) -> UpdateStatus {
    match source.latest_version() {
        Ok(latest) if latest.is_empty() => UpdateStatus::Unknown,
        Ok(latest) if latest == config.version => UpdateStatus::UpToDate,
        Ok(latest) => UpdateStatus::Available(latest),
        Err(e) => {
            debug!("version check failed: {}", e);
            UpdateStatus::Unknown
        }
    }
}

/// Print the update nudge if a newer build exists
pub fn notify(config: &Config, source: &dyn VersionSource, out: &mut dyn Write) -> Result<()> {
    if let UpdateStatus::Available(latest) = check(config, source) {
        debug!("stored version {:?}, latest {}", config.version, latest);
        writeln!(out, "\nNew version available, run this to update:\ndockpick --update")?;
    }
    Ok(())
}

/// Install the latest build and record its version.
///
/// When already current, asks before reinstalling.
pub fn update<S: LineSource, W: Write>(
    config: &mut Config,
    store: &ConfigStore,
    source: &dyn VersionSource,
    installer: &dyn Installer,
    prompter: &mut Prompter<S, W>,
) -> Result<()> {
    let latest = source.latest_version()?;
    if latest.is_empty() {
        return Err(DockpickError::Version("empty latest version".to_string()));
    }

    if config.version == latest {
        println!("Already at latest version: {}", config.version);
        if !prompter.confirm("Update anyways? y/N")? {
            return Ok(());
        }
    }

    installer.install()?;

    config.version = latest;
    if let Err(e) = store.save(config) {
        println!("Error saving config: {}", e);
    }
    println!("Updated to version {}", config.version);
    Ok(())
}
