//! Installing a new build

use std::process::{Command, Stdio};

use crate::error::{DockpickError, Result};

/// Installs the latest build of dockpick
pub trait Installer {
    fn install(&self) -> Result<()>;
}

/// `cargo install --git https://github.com/<repo> --locked`
pub struct CargoInstaller {
    repository: String,
}

impl CargoInstaller {
    pub fn new(repository: &str) -> Self {
        Self {
            repository: repository.to_string(),
        }
    }

    fn args(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            "--git".to_string(),
            format!("https://github.com/{}", self.repository),
            "--locked".to_string(),
        ]
    }
}

impl Installer for CargoInstaller {
    fn install(&self) -> Result<()> {
        let cargo = which::which("cargo").map_err(|e| DockpickError::Install(e.to_string()))?;
        let args = self.args();
        println!("{} {}", cargo.display(), args.join(" "));

        let status = Command::new(&cargo)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| DockpickError::Install(e.to_string()))?;

        if !status.success() {
            return Err(DockpickError::Install(status.to_string()));
        }
        Ok(())
    }
}
