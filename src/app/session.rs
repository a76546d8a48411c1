// CauseConv - app/session.rs
//
// Interactive conversion session: read a line, gate it, classify it, put the
// result at the front of the list, print it. A few `:` commands manage the
// list (remove one result, clear all, show all).
//
// Generic over BufRead/Write so the loop runs the same against a terminal
// or an in-memory buffer.

use crate::app::results::{ResultId, ResultList};
use crate::core::classifier::classify;
use crate::core::gate::check_character_set;
use crate::core::render::{self, OutputFormat};
use crate::util::error::{InputError, RenderError};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

const HELP: &str = "\
Enter a case number or FACTS number, e.g. D-1-DC-05-123456, d1dc05987678,
D-1-GN-05-123456, 914954.

Commands:
  :list          show every result, most recent first
  :rm <id>       remove one result (alias :delete)
  :clear         remove all results
  :help          show this text
  :quit          leave (alias :q, or end of input)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Whitespace only; nothing to do.
    Blank,
    /// A cause number to convert (trimmed).
    Convert(String),
    List,
    Remove(ResultId),
    Clear,
    Help,
    Quit,
    /// A `:` command that was not understood.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Blank;
        }
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Command::Convert(trimmed.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("list" | "ls"), None, None) => Command::List,
            (Some("clear"), None, None) => Command::Clear,
            (Some("help" | "h" | "?"), None, None) => Command::Help,
            (Some("quit" | "q" | "exit"), None, None) => Command::Quit,
            (Some("rm" | "delete" | "del"), Some(id), None) => {
                match id.trim_start_matches('#').parse() {
                    Ok(id) => Command::Remove(id),
                    Err(_) => Command::Unknown(trimmed.to_string()),
                }
            }
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    results: ResultList,
    today: NaiveDate,
    format: OutputFormat,
    show_prompt: bool,
}

impl Session {
    pub fn new(today: NaiveDate, format: OutputFormat) -> Self {
        Self {
            results: ResultList::new(),
            today,
            format,
            show_prompt: true,
        }
    }

    /// Suppress the `> ` prompt (useful when input is piped).
    pub fn without_prompt(mut self) -> Self {
        self.show_prompt = false;
        self
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// Gate, classify, and store one raw number. On rejection the list is
    /// left unchanged.
    pub fn submit(&mut self, raw: &str) -> Result<ResultId, InputError> {
        check_character_set(raw)?;
        let result = classify(raw, self.today);
        Ok(self.results.push(result))
    }

    /// Read commands from `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), RenderError> {
        tracing::info!(format = ?self.format, today = %self.today, "Interactive session started");

        self.prompt(&mut output)?;
        for line in input.lines() {
            let line = line?;
            if self.handle(&line, &mut output)? == Flow::Stop {
                break;
            }
            self.prompt(&mut output)?;
        }

        tracing::info!(results = self.results.len(), "Interactive session ended");
        Ok(())
    }

    /// Execute one input line.
    pub fn handle<W: Write>(&mut self, line: &str, mut output: W) -> Result<Flow, RenderError> {
        match Command::parse(line) {
            Command::Blank => {}
            Command::Convert(raw) => match self.submit(&raw) {
                Ok(id) => {
                    if let Some(result) = self.results.get(id) {
                        render::render(self.format, &mut output, &[(id, result)])?;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Input rejected");
                    writeln!(output, "{e}")?;
                }
            },
            Command::List => {
                if self.results.is_empty() {
                    writeln!(output, "No results.")?;
                } else {
                    render::render(self.format, &mut output, &self.results.entries())?;
                }
            }
            Command::Remove(id) => match self.results.remove(id) {
                Some(removed) => writeln!(output, "Removed #{id} ({})", removed.raw)?,
                None => writeln!(output, "No result #{id}")?,
            },
            Command::Clear => {
                let count = self.results.len();
                self.results.clear();
                tracing::debug!(count, "Result list cleared");
                writeln!(output, "Cleared {count} result(s)")?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Stop),
            Command::Unknown(text) => {
                writeln!(output, "Unknown command '{text}'. Type :help for commands.")?
            }
        }
        Ok(Flow::Continue)
    }

    fn prompt<W: Write>(&self, output: &mut W) -> Result<(), RenderError> {
        if self.show_prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), OutputFormat::Text)
            .without_prompt()
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), Command::Blank);
        assert_eq!(Command::parse(" 914954 "), Command::Convert("914954".to_string()));
        assert_eq!(Command::parse(":list"), Command::List);
        assert_eq!(Command::parse(":rm 3"), Command::Remove(3));
        assert_eq!(Command::parse(":delete #4"), Command::Remove(4));
        assert_eq!(Command::parse(":clear"), Command::Clear);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":rm"), Command::Unknown(":rm".to_string()));
        assert_eq!(Command::parse(":rm x"), Command::Unknown(":rm x".to_string()));
    }

    #[test]
    fn test_convert_prints_card_and_stores_result() {
        let mut s = session();
        let output = run(&mut s, "D-1-DC-02-123456\n");
        assert!(output.contains("[#1]"));
        assert!(output.contains("1023456"));
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_rejected_input_leaves_list_unchanged() {
        let mut s = session();
        let output = run(&mut s, "914954\nabc123\n");
        assert!(output.contains("isn't ours"));
        assert_eq!(s.results().len(), 1);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let mut s = session();
        let output = run(&mut s, "\n   \n");
        assert!(output.is_empty());
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut s = session();
        let output = run(&mut s, "12345\n914954\n1023456\n:rm 2\n:rm 9\n");
        assert!(output.contains("Removed #2 (914954)"));
        assert!(output.contains("No result #9"));
        let ids: Vec<ResultId> = s.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let output = run(&mut s, ":clear\n:list\n");
        assert!(output.contains("Cleared 2 result(s)"));
        assert!(output.contains("No results."));
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let mut s = session();
        run(&mut s, "12345\n914954\n");
        let listing = run(&mut s, ":list\n");
        let newest = listing.find("[#2]").unwrap();
        let oldest = listing.find("[#1]").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut s = session();
        run(&mut s, ":quit\n12345\n");
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_prompt_is_written_when_enabled() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut s = Session::new(today, OutputFormat::Json);
        let mut out = Vec::new();
        s.run(Cursor::new("12345\n"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with(PROMPT));
        assert!(output.contains("\"canonical_form\": \"D-1-DC-85-12345\""));
    }
}
