//! Top-level dispatch of a dockpick invocation

use std::io::{self, Write};

use clap::CommandFactory;
use log::debug;

use crate::cli::{Action, Args};
use crate::config::{Config, ConfigStore};
use crate::error::Result;
use crate::prompt::{LineSource, Prompter};
use crate::runtime::Runtime;
use crate::update::{self, CargoInstaller, GitHubSource, VersionSource, REPO};

/// Branch whose head is the latest build
const RELEASE_BRANCH: &str = "main";

/// Run the action selected by `args`.
///
/// Config problems are reported and replaced by an empty config; only setup,
/// listing and input failures end the run with an error. The version check
/// runs afterwards either way.
pub fn run(args: &Args) -> Result<()> {
    let store = match &args.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new(),
    };
    debug!("config file {}", store.path().display());

    let mut config = store.load().unwrap_or_else(|e| {
        println!("config error: {}", e);
        Config::new()
    });

    let source = GitHubSource::new(REPO, RELEASE_BRANCH);
    let result = dispatch(args, &store, &mut config, &source);

    if !args.no_update_check {
        let mut stdout = io::stdout();
        if let Err(e) = update::notify(&config, &source, &mut stdout) {
            debug!("could not print update notice: {}", e);
        }
    }

    result
}

fn dispatch(
    args: &Args,
    store: &ConfigStore,
    config: &mut Config,
    source: &dyn VersionSource,
) -> Result<()> {
    match args.action() {
        Action::Help => {
            print_help(store);
            Ok(())
        }
        Action::Update => {
            let installer = CargoInstaller::new(REPO);
            update::update(config, store, source, &installer, &mut prompter()?)
        }
        Action::Version => {
            println!("dockpick version {}", version_label(config));
            Ok(())
        }
        Action::Exec {
            container,
            commands,
        } => {
            let runtime = Runtime::locate(&args.runtime)?;
            exec(&runtime, &commands, &container);
            Ok(())
        }
        Action::Interactive => {
            let runtime = Runtime::locate(&args.runtime)?;
            session(&runtime, store, config, &mut prompter()?)
        }
    }
}

/// Pick a container and command, remember the choice, then exec
pub fn session<S: LineSource, W: Write>(
    runtime: &Runtime,
    store: &ConfigStore,
    config: &mut Config,
    prompter: &mut Prompter<S, W>,
) -> Result<()> {
    let containers = match runtime.list_containers()? {
        None => {
            println!("No containers running.");
            return Ok(());
        }
        Some(containers) if containers.is_empty() => {
            println!("No available containers found");
            return Ok(());
        }
        Some(containers) => containers,
    };

    let index = prompter.select_container(&containers)?;
    let selected = &containers[index];
    println!("Container: {} ({})", selected.names, selected.id);
    println!();

    let commands = prompter.select_command(config.last_command(&selected.names))?;
    println!("Command: {}", commands.join(" "));

    config.remember(&selected.names, &commands);
    if let Err(e) = store.save(config) {
        println!("error saving config: {}", e);
    }

    println!();
    exec(runtime, &commands, &selected.names);
    Ok(())
}

// Child failures are reported here and never fail the run.
fn exec(runtime: &Runtime, commands: &[String], container: &str) {
    println!("{}", runtime.describe_exec(commands, container));
    match runtime.exec_interactive(commands, container) {
        Ok(outcome) => match outcome.code {
            Some(code) => println!("Exited from {} with code {}", container, code),
            None => println!("Exited from {} by signal", container),
        },
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn version_label(config: &Config) -> String {
    if config.version.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{} ({})", env!("CARGO_PKG_VERSION"), config.version)
    }
}

fn print_help(store: &ConfigStore) {
    println!("Repository: https://github.com/{}", REPO);
    println!("Config: {}", store.path().display());
    println!();
    println!("{}", Args::command().render_help());
    println!(
        r#"Examples:
  dockpick                               Interactive: pick a container, then a command
  dockpick mysql                         Run bash in mysql
  dockpick mysql ls -l                   Run 'ls -l' in mysql
  dockpick --container mysql --cmd "ls -l""#
    );
}

#[cfg(not(feature = "readline"))]
fn prompter() -> Result<Prompter<impl LineSource, io::Stdout>> {
    Ok(Prompter::stdio())
}

#[cfg(feature = "readline")]
fn prompter() -> Result<Prompter<impl LineSource, io::Stdout>> {
    Ok(Prompter::new(crate::prompt::Readline::new()?, io::stdout()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        let mut config = Config::new();
        assert_eq!(version_label(&config), env!("CARGO_PKG_VERSION"));
        config.version = "9fceb02".to_string();
        assert!(version_label(&config).ends_with("(9fceb02)"));
    }
}
