//! Dockpick - an interactive front-end for `docker exec`
//!
//! Lists running containers, lets the user pick one and a command, remembers
//! the last command used per container, and execs into the container with
//! the terminal attached.
//!
//! # Example
//!
//! ```no_run
//! use dockpick::{ConfigStore, Prompter, Runtime};
//!
//! let runtime = Runtime::locate("docker").unwrap();
//! let store = ConfigStore::new();
//! let mut config = store.load().unwrap_or_default();
//! dockpick::session(&runtime, &store, &mut config, &mut Prompter::stdio()).unwrap();
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod runtime;
pub mod update;

pub use app::{run, session};
pub use config::{Config, ConfigStore};
pub use error::{DockpickError, Result};
pub use prompt::{LineSource, Prompter};
pub use runtime::{Container, ExecOutcome, Runtime};
pub use update::{UpdateStatus, VersionSource};
