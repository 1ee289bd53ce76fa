//! Blocking line-oriented console I/O
//!
//! The game talks to the player through this port, so tests can
//! script input and capture output without a terminal.

use std::io::{self, BufRead, Write};

/// Prompt, read, and print operations used by the game sessions.
pub trait Console {
    /// Print `prompt` without a trailing newline and block for one
    /// line of input. The returned line has its newline stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Console over process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")
    }
}

/// Scripted console for tests: replays canned input and records every
/// prompt and line of output.
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<'a, I: IntoIterator<Item = &'a str>>(inputs: I) -> Self {
        Self {
            inputs: inputs.into_iter().map(String::from).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// True once every scripted line has been consumed.
    pub fn exhausted(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("script ran dry at prompt {:?}", prompt),
            )
        })
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_input_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), "second");
        assert!(console.exhausted());
        assert_eq!(console.prompts, vec!["> ", "> "]);
    }

    #[test]
    fn test_scripted_console_errors_when_dry() {
        let mut console = ScriptedConsole::new([]);
        let err = console.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::new([]);
        console.write_line("hello").unwrap();
        console.write_line("world").unwrap();
        assert_eq!(console.output, vec!["hello", "world"]);
    }
}
