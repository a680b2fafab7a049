//! Command-line interface

mod args;

pub use args::{normalize_args, Action, Args};
