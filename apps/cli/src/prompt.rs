//! Terminal stand-ins for the file and folder pickers

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Line-based prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show a notice
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Ask for a path; an empty answer or end of input means "cancel"
    pub fn ask_path(&mut self, question: &str) -> io::Result<Option<PathBuf>> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(clean_path_input(&line).map(PathBuf::from))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Trim the answer and drop the quotes terminals add to dragged-in paths
fn clean_path_input(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| trimmed.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(trimmed);
    (!unquoted.is_empty()).then_some(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("  mods.txt \n"), Some("mods.txt"));
        assert_eq!(clean_path_input("\"C:\\Games\\mod\"\r\n"), Some("C:\\Games\\mod"));
        assert_eq!(clean_path_input("'/home/me/mod'\n"), Some("/home/me/mod"));
        assert_eq!(clean_path_input("\n"), None);
        assert_eq!(clean_path_input("\"\"\n"), None);
    }

    #[test]
    fn test_ask_path_reads_one_line_per_question() {
        let mut prompter = Prompter::new(Cursor::new("first\nsecond\n"), Vec::new());

        assert_eq!(prompter.ask_path("One").unwrap(), Some(PathBuf::from("first")));
        assert_eq!(prompter.ask_path("Two").unwrap(), Some(PathBuf::from("second")));
        assert_eq!(prompter.ask_path("Three").unwrap(), None);

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(shown, "One: Two: Three: ");
    }

    #[test]
    fn test_say_writes_a_line() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("hello").unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "hello\n");
    }
}
