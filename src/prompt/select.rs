//! Container and command selection menus

use std::io::{self, Write};

use super::reader::LineSource;
use crate::error::{DockpickError, Result};
use crate::runtime::Container;

/// Commands offered at the command prompt
pub const COMMAND_CHOICES: [&str; 3] = ["bash", "sh", OTHER_COMMAND];

/// Choice that asks for a raw command line
pub const OTHER_COMMAND: &str = "other";

/// Answers that decline a confirmation
const DECLINE_ANSWERS: [&str; 3] = ["", "n", "no"];

enum Choice {
    Index(usize),
    Empty,
}

/// Drives menus over a line source, printing to `out`
pub struct Prompter<S, W> {
    source: S,
    out: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// List containers and return the index of the chosen one
    pub fn select_container(&mut self, containers: &[Container]) -> Result<usize> {
        writeln!(self.out, "Containers:")?;
        for (i, c) in containers.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, c.names)?;
        }

        let names: Vec<&str> = containers.iter().map(|c| c.names.as_str()).collect();
        match self.pick(&names, "Enter container number or name: ", false)? {
            Choice::Index(i) => Ok(i),
            Choice::Empty => Err(DockpickError::Input("empty selection".to_string())),
        }
    }

    /// Ask for the command to run.
    ///
    /// With a remembered `default`, empty input selects it as-is. Choosing
    /// `other` reads a raw command line split on single spaces; quoting is
    /// not interpreted.
    pub fn select_command(&mut self, default: Option<&[String]>) -> Result<Vec<String>> {
        let default = default.filter(|d| !d.is_empty());
        let default_label = default.map(|d| d.join(" "));

        writeln!(self.out, "Commands:")?;
        if let Some(label) = &default_label {
            writeln!(self.out, "Press ENTER to select default ({})", label)?;
        }
        for (i, c) in COMMAND_CHOICES.iter().enumerate() {
            let marker = if default_label.as_deref() == Some(*c) {
                " (default)"
            } else {
                ""
            };
            writeln!(self.out, "{}. {}{}", i + 1, c, marker)?;
        }

        let choice = self.pick(&COMMAND_CHOICES, "Enter command number: ", default.is_some())?;
        let command = match (choice, default) {
            (Choice::Empty, Some(default)) => return Ok(default.to_vec()),
            (Choice::Index(i), _) => COMMAND_CHOICES[i],
            (Choice::Empty, None) => {
                return Err(DockpickError::Input("empty selection".to_string()))
            }
        };

        if command != OTHER_COMMAND {
            return Ok(vec![command.to_string()]);
        }

        loop {
            let raw = self.read("Enter raw command: ")?;
            if raw.is_empty() {
                continue;
            }
            return Ok(raw.split(' ').map(str::to_string).collect());
        }
    }

    /// Ask a yes/no question; empty, `n` and `no` decline
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.out, "{}", question)?;
        let answer = self.read("")?;
        Ok(!DECLINE_ANSWERS.contains(&answer.to_lowercase().as_str()))
    }

    fn pick(&mut self, labels: &[&str], prompt: &str, allow_empty: bool) -> Result<Choice> {
        loop {
            writeln!(self.out)?;
            let input = self.read(prompt)?;

            if let Some(i) = labels.iter().position(|l| *l == input) {
                return Ok(Choice::Index(i));
            }

            if input.is_empty() && allow_empty {
                return Ok(Choice::Empty);
            }

            let number: i64 = match input.parse() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.out, "error parsing selected number '{}'", input)?;
                    continue;
                }
            };

            if number >= 1 && (number as u64) <= labels.len() as u64 {
                return Ok(Choice::Index((number - 1) as usize));
            }

            writeln!(self.out, "Invalid selection '{}', try again.", number)?;
        }
    }

    fn read(&mut self, prompt: &str) -> Result<String> {
        self.source
            .next_line(prompt, &mut self.out)
            .map_err(|e| DockpickError::Input(e.to_string()))?
            .ok_or_else(|| DockpickError::Input("end of input".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn containers(names: &[&str]) -> Vec<Container> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Container {
                id: format!("id{}", i),
                names: n.to_string(),
            })
            .collect()
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    fn tokens(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_select_container_by_number() {
        let list = containers(&["cache", "db", "web"]);
        let mut p = prompter("2\n");
        assert_eq!(p.select_container(&list).unwrap(), 1);
        let out = output(p);
        assert!(out.starts_with("Containers:\n1. cache\n2. db\n3. web\n"));
    }

    #[test]
    fn test_select_container_name_matches_number() {
        let list = containers(&["cache", "db", "web"]);
        for (i, c) in list.iter().enumerate() {
            let by_name = prompter(&format!("{}\n", c.names)).select_container(&list).unwrap();
            let by_number = prompter(&format!("{}\n", i + 1)).select_container(&list).unwrap();
            assert_eq!(by_name, by_number);
        }
    }

    #[test]
    fn test_select_container_numeric_name_wins() {
        let list = containers(&["2", "db"]);
        let mut p = prompter("2\n");
        assert_eq!(p.select_container(&list).unwrap(), 0);
    }

    #[test]
    fn test_select_container_rejects_out_of_range() {
        let list = containers(&["cache", "db", "web"]);
        let mut p = prompter("0\n4\n3\n");
        assert_eq!(p.select_container(&list).unwrap(), 2);
        let out = output(p);
        assert!(out.contains("Invalid selection '0', try again."));
        assert!(out.contains("Invalid selection '4', try again."));
        assert_eq!(out.matches("Enter container number or name: ").count(), 3);
    }

    #[test]
    fn test_select_container_rejects_garbage() {
        let list = containers(&["web"]);
        let mut p = prompter("abc\n\n1\n");
        assert_eq!(p.select_container(&list).unwrap(), 0);
        let out = output(p);
        assert!(out.contains("error parsing selected number 'abc'"));
        assert!(out.contains("error parsing selected number ''"));
    }

    #[test]
    fn test_select_container_end_of_input() {
        let list = containers(&["web"]);
        let mut p = prompter("9\n");
        assert!(matches!(p.select_container(&list), Err(DockpickError::Input(_))));
    }

    #[test]
    fn test_select_command_by_number() {
        let mut p = prompter("2\n");
        assert_eq!(p.select_command(None).unwrap(), tokens(&["sh"]));
    }

    #[test]
    fn test_select_command_literal_without_default() {
        let mut p = prompter("bash\n");
        assert_eq!(p.select_command(None).unwrap(), tokens(&["bash"]));
    }

    #[test]
    fn test_select_command_empty_uses_default() {
        let default = tokens(&["psql", "-U", "postgres"]);
        let mut p = prompter("\n");
        assert_eq!(p.select_command(Some(&default)).unwrap(), default);
        let out = output(p);
        assert!(out.contains("Press ENTER to select default (psql -U postgres)"));
    }

    #[test]
    fn test_select_command_empty_without_default_reprompts() {
        let mut p = prompter("\n1\n");
        assert_eq!(p.select_command(None).unwrap(), tokens(&["bash"]));
        assert!(output(p).contains("error parsing selected number ''"));
    }

    #[test]
    fn test_select_command_marks_default_choice() {
        let default = tokens(&["sh"]);
        let mut p = prompter("\n");
        assert_eq!(p.select_command(Some(&default)).unwrap(), default);
        let out = output(p);
        assert!(out.contains("2. sh (default)\n"));
        assert!(out.contains("1. bash\n"));
    }

    #[test]
    fn test_select_command_other() {
        let mut p = prompter("3\nls -l\n");
        assert_eq!(p.select_command(None).unwrap(), tokens(&["ls", "-l"]));
    }

    #[test]
    fn test_select_command_other_splits_on_single_spaces() {
        let mut p = prompter("other\necho  \"a b\"\n");
        assert_eq!(
            p.select_command(None).unwrap(),
            tokens(&["echo", "", "\"a", "b\""])
        );
    }

    #[test]
    fn test_select_command_other_empty_reprompts() {
        let mut p = prompter("other\n\ntop\n");
        assert_eq!(p.select_command(None).unwrap(), tokens(&["top"]));
        assert_eq!(output(p).matches("Enter raw command: ").count(), 2);
    }

    #[test]
    fn test_confirm() {
        for (input, expected) in [("\n", false), ("n\n", false), ("NO\n", false), ("y\n", true), ("sure\n", true)] {
            let mut p = prompter(input);
            assert_eq!(p.confirm("Update anyways? y/N").unwrap(), expected, "input {:?}", input);
        }
    }
}
