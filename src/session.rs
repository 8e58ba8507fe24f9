// File: ./src/session.rs
use crate::command::Command;
use crate::config::Config;
use crate::error::{DownyError, Result};
use crate::input::{LineSource, ReaderSource};
use crate::storage::Storage;
use crate::tasklist::TaskList;
use crate::ui::Ui;
use std::io::{self, Write};

/// Owns everything a running session touches
pub struct Session<W: Write> {
    storage: Storage,
    tasks: TaskList,
    ui: Ui<W>,
    show_welcome: bool,
}

impl<W: Write> Session<W> {
    /// Reads the task file. A file that cannot be read at all degrades to an
    /// empty list, lines that cannot be parsed are left out. Both are reported.
    pub fn open(storage: Storage, mut ui: Ui<W>) -> Result<Self> {
        let tasks = match storage.load() {
            Ok(loaded) => {
                for skipped in &loaded.skipped {
                    ui.show_warning(&skipped.to_string())?;
                }
                loaded.tasks
            }
            Err(e) => {
                tracing::warn!("starting with an empty list: {}", e);
                ui.show_warning(&format!("{} Starting with an empty list.", e))?;
                TaskList::new()
            }
        };
        tracing::info!(path = ?storage.path(), count = tasks.len(), "session opened");
        Ok(Self {
            storage,
            tasks,
            ui,
            show_welcome: true,
        })
    }

    pub fn with_welcome(mut self, show: bool) -> Self {
        self.show_welcome = show;
        self
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn ui(&self) -> &Ui<W> {
        &self.ui
    }

    /// Handles one input line. Returns whether the session should end.
    ///
    /// Command errors are rendered and swallowed, only output failures escape.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let outcome = Command::parse(line).and_then(|cmd| {
            cmd.execute(&self.storage, &mut self.tasks, &mut self.ui)?;
            Ok(cmd.is_exit())
        });
        match outcome {
            Ok(exit) => Ok(exit),
            Err(DownyError::Output(e)) => Err(DownyError::Output(e)),
            Err(e) => {
                tracing::debug!(input = line, "command failed: {}", e);
                self.ui.show_error(&e)?;
                Ok(false)
            }
        }
    }

    /// Runs until `bye` or the end of input
    pub fn run<S: LineSource>(&mut self, source: &mut S) -> Result<()> {
        if self.show_welcome {
            self.ui.show_welcome()?;
        }
        while let Some(line) = source.next_line()? {
            if self.handle_line(&line)? {
                tracing::info!("session ended by user");
                return Ok(());
            }
        }
        tracing::info!("input closed, ending session");
        Ok(())
    }
}

/// Interactive session on stdin/stdout
pub fn run(config: &Config) -> anyhow::Result<()> {
    let storage = Storage::new(config.data_file());
    let stdout = io::stdout();
    let mut session = Session::open(storage, Ui::new(stdout.lock()))?.with_welcome(config.show_welcome);

    let stdin = io::stdin();
    let mut source = ReaderSource::new(stdin.lock());
    session.run(&mut source)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> Session<Vec<u8>> {
        let storage = Storage::new(dir.path().join("tasks.txt"));
        Session::open(storage, Ui::new(Vec::new())).unwrap()
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);

        assert!(!session.handle_line("blah").unwrap());
        assert!(!session.handle_line("mark 5").unwrap());
        assert!(!session.handle_line("todo").unwrap());
        assert!(session.handle_line("bye").unwrap());

        let out = session.ui().captured();
        assert!(out.contains("Error: I don't know what 'blah' means."));
        assert!(out.contains("Error: There is no task number 5."));
        assert!(out.contains("Error: Please give the todo a description."));
        assert!(out.contains("Bye! Yippee!"));
    }

    #[test]
    fn stops_at_bye_and_ignores_the_rest() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir);
        let mut source = ReaderSource::new(Cursor::new("todo a\nbye\ntodo b\n"));

        session.run(&mut source).unwrap();
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("todo b"));
    }

    #[test]
    fn bad_bytes_in_input_do_not_end_the_session() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir).with_welcome(false);
        let mut source = ReaderSource::new(Cursor::new(&b"todo caf\xe9\ntodo ok\nbye\n"[..]));

        session.run(&mut source).unwrap();
        let names: Vec<&str> = session.tasks().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["caf\u{FFFD}", "ok"]);
        assert!(session.ui().captured().contains("Bye! Yippee!"));
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir).with_welcome(false);
        session.run(&mut ReaderSource::new(Cursor::new("todo a\n"))).unwrap();

        let out = session.ui().captured();
        assert!(!out.contains("Hello! I'm Downy."));
        assert!(!out.contains("Bye! Yippee!"));
    }

    #[test]
    fn unreadable_file_starts_empty_with_a_warning() {
        let dir = TempDir::new().unwrap();
        // Reading a directory as the data file fails
        let path = dir.path().join("tasks.txt");
        fs::create_dir(&path).unwrap();

        let session = Session::open(Storage::new(&path), Ui::new(Vec::new())).unwrap();
        assert!(session.tasks().is_empty());
        assert!(session.ui().captured().contains("Warning: Could not read tasks from"));
    }

    #[test]
    fn corrupt_lines_are_reported_on_open() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks.txt"), "T|0|fine\nnonsense\n").unwrap();

        let session = session_in(&dir);
        assert_eq!(session.tasks().len(), 1);
        assert!(session.ui().captured().contains("Warning: Unreadable task entry on line 2"));
    }
}
