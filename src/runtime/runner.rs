//! Subprocess invocations of the container runtime

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use log::{debug, warn};

use super::container::{parse_listing, sort_by_name, Container};
use crate::error::{DockpickError, Result};

/// Runtime binary looked up on `PATH` when none is configured
pub const DEFAULT_RUNTIME: &str = "docker";

/// Set while an exec'd child owns the terminal
static CHILD_RUNNING: AtomicBool = AtomicBool::new(false);
static INTERRUPT_POLICY: Once = Once::new();

/// Exit information of an interactive exec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Exit code, `None` if the child was killed by a signal
    pub code: Option<i32>,
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A resolved container runtime binary
#[derive(Debug, Clone)]
pub struct Runtime {
    binary: PathBuf,
}

impl Runtime {
    /// Resolve `name` on `PATH` (or accept it as a path to an executable)
    pub fn locate(name: &str) -> Result<Self> {
        let binary = which::which(name).map_err(|source| DockpickError::RuntimeNotFound {
            name: name.to_string(),
            source,
        })?;
        debug!("using container runtime at {}", binary.display());
        Ok(Self { binary })
    }

    /// Use `binary` as-is without a `PATH` lookup
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// List running containers sorted by name.
    ///
    /// `Ok(None)` means the runtime printed nothing at all.
    pub fn list_containers(&self) -> Result<Option<Vec<Container>>> {
        let output = Command::new(&self.binary)
            .args(["ps", "--format", "{{json .}}"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DockpickError::Listing(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DockpickError::Listing(format!(
                "{} ({})",
                stderr.trim(),
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("listing returned {} bytes", stdout.len());

        let mut containers = parse_listing(&stdout)?;
        if let Some(containers) = containers.as_mut() {
            sort_by_name(containers);
        }
        Ok(containers)
    }

    /// The command line `exec_interactive` runs, for display
    pub fn describe_exec(&self, commands: &[String], container: &str) -> String {
        let mut parts = vec![
            self.binary.display().to_string(),
            "exec".to_string(),
            "-it".to_string(),
            container.to_string(),
        ];
        parts.extend(commands.iter().cloned());
        parts.join(" ")
    }

    /// Run `commands` inside `container` with the terminal attached.
    ///
    /// A non-zero exit of the child is returned in the outcome; only a
    /// failure to run or wait on the child is an error.
    pub fn exec_interactive(&self, commands: &[String], container: &str) -> Result<ExecOutcome> {
        install_interrupt_policy();

        let mut child = Command::new(&self.binary)
            .args(["exec", "-it", container])
            .args(commands)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| DockpickError::Exec(e.to_string()))?;

        let _guard = ChildGuard::enter();
        let status = child
            .wait()
            .map_err(|e| DockpickError::Exec(e.to_string()))?;
        debug!("exec in {} finished with {}", container, status);

        Ok(ExecOutcome {
            code: status.code(),
        })
    }
}

/// Marks the child as running for the lifetime of the guard
struct ChildGuard;

impl ChildGuard {
    fn enter() -> Self {
        CHILD_RUNNING.store(true, Ordering::SeqCst);
        ChildGuard
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        CHILD_RUNNING.store(false, Ordering::SeqCst);
    }
}

// Ctrl+C belongs to the child while it runs; otherwise it ends dockpick.
fn install_interrupt_policy() {
    INTERRUPT_POLICY.call_once(|| {
        let result = ctrlc::set_handler(|| {
            if !CHILD_RUNNING.load(Ordering::SeqCst) {
                std::process::exit(130);
            }
        });
        if let Err(e) = result {
            warn!("failed to set Ctrl+C handler: {}", e);
        }
    });
}
