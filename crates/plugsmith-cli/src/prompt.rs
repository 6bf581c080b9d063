//! Interactive input collection.
//!
//! [`Prompter`] abstracts over a terminal UI (`dialoguer`, behind the
//! `interactive` feature) and a line-based reader used when stdin is piped.
//! Both return the default for an empty answer.

use std::io::{self, BufRead, Write};

use crate::error::{CliResult, IntoCli};

/// Source of answers for `plugsmith new`.
pub trait Prompter {
    /// Ask for free text, falling back to `default` on an empty answer.
    fn text(&mut self, prompt: &str, default: &str) -> CliResult<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool>;
}

/// Interpret a yes/no answer.
///
/// Empty means `default`; `y`, `yes`, `1` and `true` (any case) mean yes;
/// anything else means no.
pub fn parse_bool_answer(answer: &str, default: bool) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    if answer.is_empty() {
        return default;
    }
    matches!(answer.as_str(), "y" | "yes" | "1" | "true")
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{question}").with_cli_context(|| "failed to write prompt")?;
        self.output
            .flush()
            .with_cli_context(|| "failed to flush prompt")?;

        // EOF reads as an empty answer.
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .with_cli_context(|| "failed to read answer")?;
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str, default: &str) -> CliResult<String> {
        let answer = self.ask(&format!("{prompt} [{default}]: "))?;
        Ok(if answer.is_empty() {
            default.to_owned()
        } else {
            answer
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{prompt} [{hint}]: "))?;
        Ok(parse_bool_answer(&answer, default))
    }
}

/// Terminal prompter with editing and themed output.
#[cfg(feature = "interactive")]
pub struct TermPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl Prompter for TermPrompter {
    fn text(&mut self, prompt: &str, default: &str) -> CliResult<String> {
        let answer: String = dialoguer::Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_owned())
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_owned()
        } else {
            answer.to_owned()
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> CliResult<bool> {
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Pick the prompter for this session: the terminal UI when both ends are a
/// TTY and the feature is on, otherwise plain lines on stdin/stderr.
pub fn session_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return Box::new(TermPrompter {
                theme: dialoguer::theme::ColorfulTheme::default(),
            });
        }
    }

    Box::new(LinePrompter::new(io::stdin().lock(), io::stderr()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn bool_answers() {
        for yes in ["y", "YES", " 1 ", "True"] {
            assert!(parse_bool_answer(yes, false), "{yes}");
        }
        for no in ["n", "no", "0", "nope"] {
            assert!(!parse_bool_answer(no, true), "{no}");
        }
        assert!(parse_bool_answer("", true));
        assert!(!parse_bool_answer("  ", false));
    }

    #[test]
    fn empty_text_answer_takes_default() {
        let mut p = prompter("\nAudio\n");
        assert_eq!(p.text("Plugin name", "MyPlugin").unwrap(), "MyPlugin");
        assert_eq!(p.text("Plugin name", "MyPlugin").unwrap(), "Audio");
    }

    #[test]
    fn eof_takes_default() {
        let mut p = prompter("");
        assert_eq!(p.text("Plugin name", "MyPlugin").unwrap(), "MyPlugin");
        assert!(p.confirm("Generate a model?", true).unwrap());
    }

    #[test]
    fn prompt_shows_default() {
        let mut p = prompter("n\n");
        assert!(!p.confirm("Generate a model?", true).unwrap());
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown, "Generate a model? [Y/n]: ");
    }
}
