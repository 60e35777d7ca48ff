//! Terminal input handling for the game loop.
//!
//! Uses rustyline (line editing and history) when stdin is a terminal and falls back to a
//! plain stdin reader otherwise. The loop only sees the [`LineSource`] trait, so it can be
//! driven from a script as well.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything that can answer a prompt with a line of input.
pub trait LineSource {
    /// # Errors
    /// - on unrecoverable I/O failure
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Helper responsible for managing the interactive input backend.
pub struct InputManager {
    backend: Backend,
}
impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }
}
impl LineSource for InputManager {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

/// Feeds pre-recorded lines, then reports end of input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}
impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}
impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}
impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = DefaultEditor::new().map_err(map_io_err)?;
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {err}", dir.display());
                }
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist history to {}: {err}", path.display());
                        }
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}
impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("delve_engine").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert_eq!(result, InputEvent::Eof);
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/delve-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("delve_engine/history.txt")));
    }

    #[test]
    fn scripted_input_runs_out_into_eof() {
        let mut input = ScriptedInput::new(["1", "4"]);
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("1".into()));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("4".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
    }
}
