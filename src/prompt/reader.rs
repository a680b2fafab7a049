//! Line input sources for prompts

use std::io::{self, BufRead, Write};

/// Blocking, line-oriented input.
pub trait LineSource {
    /// Show `prompt` on `out` and read one line without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    fn next_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if BufRead::read_line(self, &mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Line editing on a terminal through rustyline
#[cfg(feature = "readline")]
pub struct Readline(rustyline::DefaultEditor);

#[cfg(feature = "readline")]
impl Readline {
    pub fn new() -> crate::Result<Self> {
        let editor = rustyline::DefaultEditor::new()
            .map_err(|e| crate::DockpickError::Input(e.to_string()))?;
        Ok(Self(editor))
    }
}

#[cfg(feature = "readline")]
impl LineSource for Readline {
    fn next_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        use rustyline::error::ReadlineError;

        out.flush()?;
        match self.0.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => {
                Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
            }
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_next_line_strips_line_endings() {
        let mut input = Cursor::new("one\r\ntwo\nthree");
        let mut out = Vec::new();
        assert_eq!(input.next_line("> ", &mut out).unwrap().as_deref(), Some("one"));
        assert_eq!(input.next_line("> ", &mut out).unwrap().as_deref(), Some("two"));
        assert_eq!(input.next_line("> ", &mut out).unwrap().as_deref(), Some("three"));
        assert_eq!(input.next_line("> ", &mut out).unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > > ");
    }

    #[test]
    fn test_next_line_keeps_spaces() {
        let mut input = Cursor::new("  web \n");
        let mut out = Vec::new();
        assert_eq!(input.next_line("", &mut out).unwrap().as_deref(), Some("  web "));
    }
}
