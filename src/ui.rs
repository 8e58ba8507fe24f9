// File: ./src/ui.rs
// Renders every message the user sees. Holds nothing but the output sink.
use crate::error::DownyError;
use crate::model::Task;
use crate::tasklist::TaskList;
use std::io::{self, Write};

const DIVIDER: &str = "________________________________________";

const HELP_LINES: &[&str] = &[
    " - list",
    " - mark <taskNumber>",
    " - unmark <taskNumber>",
    " - delete <taskNumber>",
    " - todo <taskDescription>",
    " - deadline <taskDescription> /by <dueDate>",
    " - event <taskDescription> /from <startTime> /to <endTime>",
    " - find <keyword>",
    " - help",
    " - bye",
];

pub struct Ui<W: Write> {
    out: W,
}

impl<W: Write> Ui<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes `lines` between two dividers
    fn framed<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        writeln!(self.out, "{}", DIVIDER)?;
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        writeln!(self.out, "{}", DIVIDER)?;
        self.out.flush()
    }

    pub fn show_welcome(&mut self) -> io::Result<()> {
        self.framed(["Hello! I'm Downy.", "How can I help?"])
    }

    pub fn show_farewell(&mut self) -> io::Result<()> {
        self.framed(["Bye! Yippee!"])
    }

    pub fn show_error(&mut self, err: &DownyError) -> io::Result<()> {
        self.framed([format!("Error: {}", err)])
    }

    pub fn show_warning(&mut self, message: &str) -> io::Result<()> {
        self.framed([format!("Warning: {}", message)])
    }

    pub fn show_task_added(&mut self, task: &Task, count: usize) -> io::Result<()> {
        self.framed([
            "Okay! Added this task:".to_string(),
            format!("  {}", task),
            format!("Now you have {} tasks in this list", count),
        ])
    }

    pub fn show_marked(&mut self, task: &Task) -> io::Result<()> {
        self.framed(["Nice! You've completed this task:".to_string(), format!("  {}", task)])
    }

    pub fn show_unmarked(&mut self, task: &Task) -> io::Result<()> {
        self.framed(["Ok! This task is not complete:".to_string(), format!("  {}", task)])
    }

    pub fn show_deleted(&mut self, task: &Task) -> io::Result<()> {
        self.framed(["Ok! This task has been removed:".to_string(), format!("  {}", task)])
    }

    pub fn show_tasks(&mut self, tasks: &TaskList) -> io::Result<()> {
        let lines = std::iter::once("Here are the tasks in your list:".to_string()).chain(
            tasks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}.{}", i + 1, t)),
        );
        self.framed(lines)
    }

    /// Matches are numbered by their position in the result, not in the list
    pub fn show_matches(&mut self, tasks: &TaskList, keyword: &str) -> io::Result<()> {
        let mut lines = vec!["Here are the tasks in your list that match the keyword:".to_string()];
        let before = lines.len();
        lines.extend(
            tasks
                .find_by_keyword(keyword)
                .enumerate()
                .map(|(i, t)| format!("{}.{}", i + 1, t)),
        );
        if lines.len() == before {
            lines.push("No matching tasks found.".to_string());
        }
        self.framed(lines)
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        let lines = std::iter::once("Here are a list of valid commands:")
            .chain(HELP_LINES.iter().copied())
            .chain(std::iter::once(
                "Dates use the format YYYY-MM-DD HHmm, e.g. 2024-01-31 1800",
            ));
        self.framed(lines)
    }
}

impl Ui<Vec<u8>> {
    /// Everything rendered so far into an in-memory sink
    pub fn captured(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}
