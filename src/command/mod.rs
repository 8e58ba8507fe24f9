// File: ./src/command/mod.rs
pub mod parser;

use crate::error::Result;
use crate::storage::Storage;
use crate::tasklist::TaskList;
use crate::ui::Ui;
use chrono::NaiveDateTime;
use std::io::Write;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Task numbers are 1-based and kept as typed, bounds are checked on execution
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    ToDo {
        name: String,
    },
    Deadline {
        name: String,
        due: NaiveDateTime,
    },
    Event {
        name: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Find {
        keyword: String,
    },
    Help,
    Exit,
}

impl Command {
    /// Applies the command: list first, then the file, then the confirmation.
    ///
    /// When persisting fails the in-memory change stays and the error is returned
    /// so the caller can report the mismatch.
    pub fn execute<W: Write>(
        &self,
        storage: &Storage,
        tasks: &mut TaskList,
        ui: &mut Ui<W>,
    ) -> Result<()> {
        match self {
            Command::List => ui.show_tasks(tasks)?,
            Command::Find { keyword } => ui.show_matches(tasks, keyword)?,
            Command::Help => ui.show_help()?,
            Command::Exit => ui.show_farewell()?,
            Command::Mark(number) => {
                let task = tasks.mark_done(*number)?.clone();
                storage.save(tasks)?;
                ui.show_marked(&task)?;
            }
            Command::Unmark(number) => {
                let task = tasks.mark_not_done(*number)?.clone();
                storage.save(tasks)?;
                ui.show_unmarked(&task)?;
            }
            Command::Delete(number) => {
                let task = tasks.delete(*number)?;
                storage.save(tasks)?;
                ui.show_deleted(&task)?;
            }
            Command::ToDo { name } => {
                let task = tasks.add_todo(name).clone();
                storage.append(&task)?;
                ui.show_task_added(&task, tasks.len())?;
            }
            Command::Deadline { name, due } => {
                let task = tasks.add_deadline(name, *due).clone();
                storage.append(&task)?;
                ui.show_task_added(&task, tasks.len())?;
            }
            Command::Event { name, start, end } => {
                let task = tasks.add_event(name, *start, *end).clone();
                storage.append(&task)?;
                ui.show_task_added(&task, tasks.len())?;
            }
        }
        Ok(())
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}
