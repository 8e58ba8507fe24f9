// File: ./src/model/item.rs
use crate::model::parser::to_display_string;
use chrono::NaiveDateTime;
use std::fmt;

/// What sets a task apart from the others, beyond its name and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline {
        due: NaiveDateTime,
    },
    /// `start <= end` is checked when the event is parsed from user input,
    /// entries loaded from disk are taken as they are.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used both on disk and in the display form
    pub fn tag(&self) -> char {
        match self {
            TaskKind::ToDo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(name: impl Into<String>) -> Self {
        Self::new(name, TaskKind::ToDo)
    }

    pub fn deadline(name: impl Into<String>, due: NaiveDateTime) -> Self {
        Self::new(name, TaskKind::Deadline { due })
    }

    pub fn event(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(name, TaskKind::Event { start, end })
    }

    pub(crate) fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_done(&self) -> bool {
        self.done
    }
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }
    pub fn tag(&self) -> char {
        self.kind.tag()
    }

    /// No-op when the task is already done
    pub fn mark_done(&mut self) {
        if !self.done {
            self.done = true;
        }
    }

    /// No-op when the task is already pending
    pub fn mark_not_done(&mut self) {
        if self.done {
            self.done = false;
        }
    }

    fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.tag(), self.status_icon(), self.name)?;
        match &self.kind {
            TaskKind::ToDo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", to_display_string(due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                to_display_string(start),
                to_display_string(end)
            ),
        }
    }
}
