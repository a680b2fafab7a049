//! Dockpick CLI - pick a running container and exec into it

use clap::Parser;
use dockpick::cli::{normalize_args, Args};

fn main() {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    init_logging(args.verbose);

    if let Err(e) = dockpick::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
