//! Interactive numbered-menu prompts
//!
//! Menus accept either the 1-based number of an entry or its literal text,
//! and re-prompt in place on invalid input until a valid answer or the end
//! of the input stream.

mod reader;
mod select;

pub use reader::LineSource;
#[cfg(feature = "readline")]
pub use reader::Readline;
pub use select::{Prompter, COMMAND_CHOICES, OTHER_COMMAND};
