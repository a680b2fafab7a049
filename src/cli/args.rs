//! CLI argument parsing

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::runtime::DEFAULT_RUNTIME;

/// Command used when none is given
pub const DEFAULT_COMMAND: &str = "bash";

#[derive(Parser, Debug)]
#[command(name = "dockpick")]
#[command(author, about = "Pick a running container and exec into it", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Container to exec into, skipping the prompts
    #[arg(short, long, value_name = "NAME")]
    pub container: Option<String>,

    /// Command to run with --container, split on spaces
    #[arg(long, value_name = "COMMAND", default_value = DEFAULT_COMMAND)]
    pub cmd: String,

    /// Print usage
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Update the dockpick installation
    #[arg(short, long)]
    pub update: bool,

    /// Print the installed version
    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Container runtime binary
    #[arg(long, env = "DOCKPICK_RUNTIME", default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Config file path (default: ~/.dockpick/config.json)
    #[arg(long, env = "DOCKPICK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the version check on exit
    #[arg(long, env = "DOCKPICK_NO_UPDATE_CHECK", value_parser = FalseyValueParser::new())]
    pub no_update_check: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Container to exec into
    pub target: Option<String>,

    /// Command and arguments to run in the container (default: bash)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Single-dash long flags accepted for compatibility, e.g. `-help`
const SINGLE_DASH_FLAGS: [&str; 5] = ["help", "update", "version", "container", "cmd"];

/// Flags that consume the following argument as their value
const VALUE_FLAGS: [&str; 5] = ["-c", "--container", "--cmd", "--runtime", "--config"];

/// Rewrite `-help`, `-cmd` and friends to their `--` form.
///
/// Only the leading flags are rewritten; everything from the first
/// positional on belongs to the container command and is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    if let Some(program) = args.next() {
        normalized.push(program);
    }

    let mut expect_value = false;
    let mut in_flags = true;
    for arg in args {
        if !in_flags || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some(s) if !s.starts_with('-') => {
                in_flags = false;
                arg
            }
            Some(s) => {
                let (name, value) = match s.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (s, None),
                };
                let name = match name.strip_prefix('-') {
                    Some(long) if !long.starts_with('-') && SINGLE_DASH_FLAGS.contains(&long) => {
                        format!("--{}", long)
                    }
                    _ => name.to_string(),
                };
                if name == "--" {
                    in_flags = false;
                }
                expect_value = value.is_none() && VALUE_FLAGS.contains(&name.as_str());
                match value {
                    Some(value) => OsString::from(format!("{}={}", name, value)),
                    None => OsString::from(name),
                }
            }
            None => arg,
        };
        normalized.push(rewritten);
    }

    normalized
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Update,
    Version,
    /// Exec directly, bypassing the prompts
    Exec {
        container: String,
        commands: Vec<String>,
    },
    Interactive,
}

impl Args {
    /// Resolve flags and positionals into a single action.
    ///
    /// Flags win over positionals; an empty `--cmd` falls back to help with
    /// either form of container.
    pub fn action(&self) -> Action {
        if self.help {
            return Action::Help;
        }
        if self.update {
            return Action::Update;
        }
        if self.version {
            return Action::Version;
        }

        if let Some(container) = self.container.as_deref().filter(|c| !c.is_empty()) {
            if self.cmd.is_empty() {
                return Action::Help;
            }
            return Action::Exec {
                container: container.to_string(),
                commands: self.cmd.split(' ').map(str::to_string).collect(),
            };
        }

        if let Some(target) = self.target.as_deref().filter(|t| !t.is_empty()) {
            if self.cmd.is_empty() {
                return Action::Help;
            }
            let commands = if self.command.is_empty() {
                vec![DEFAULT_COMMAND.to_string()]
            } else {
                self.command.clone()
            };
            return Action::Exec {
                container: target.to_string(),
                commands,
            };
        }

        Action::Interactive
    }
}
