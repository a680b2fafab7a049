//! Container runtime access
//!
//! The runtime binary (`docker` by default) is driven as a subprocess:
//! - `ps --format "{{json .}}"` lists running containers, one JSON object per line
//! - `exec -it <name> <command...>` attaches the terminal to a command in a container

mod container;
mod runner;

pub use container::{parse_listing, sort_by_name, Container};
pub use runner::{ExecOutcome, Runtime, DEFAULT_RUNTIME};
