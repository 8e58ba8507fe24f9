// File: ./src/model/adapter.rs
// Handles the one-line-per-task file form
use crate::error::{DownyError, Result};
use crate::model::item::{Task, TaskKind};
use crate::model::parser::{parse_datetime, to_machine_string};

pub const DELIMITER: char = '|';

impl Task {
    /// `T|1|name`, `D|0|name|due` or `E|0|name|start|end`
    pub fn to_line(&self) -> String {
        let flag = if self.is_done() { '1' } else { '0' };
        let mut line = format!("{}{DELIMITER}{}{DELIMITER}{}", self.tag(), flag, self.name());
        match self.kind() {
            TaskKind::ToDo => {}
            TaskKind::Deadline { due } => {
                line.push(DELIMITER);
                line.push_str(&to_machine_string(due));
            }
            TaskKind::Event { start, end } => {
                line.push(DELIMITER);
                line.push_str(&to_machine_string(start));
                line.push(DELIMITER);
                line.push_str(&to_machine_string(end));
            }
        }
        line
    }

    /// Parses one line written by [`Task::to_line`]. `line_no` is 1-based and only
    /// used for error reporting.
    ///
    /// Tag and flag are read from the front and dates from the back, so names
    /// containing the delimiter survive a round trip.
    pub fn from_line(line: &str, line_no: usize) -> Result<Self> {
        let corrupt = |reason: &str| DownyError::CorruptEntry {
            line: line_no,
            reason: reason.to_string(),
        };

        let mut head = line.splitn(3, DELIMITER);
        let tag = head.next().unwrap_or_default();
        let done = match head.next() {
            Some("1") => true,
            Some("0") => false,
            Some(other) => return Err(corrupt(&format!("bad done flag '{other}'"))),
            None => return Err(corrupt("missing done flag")),
        };
        let rest = head.next().ok_or_else(|| corrupt("missing task name"))?;

        let date = |raw: &str| parse_datetime(raw).map_err(|_| corrupt(&format!("bad date '{raw}'")));

        let task = match tag {
            "T" => Task::todo(rest),
            "D" => {
                let (name, due) = rest
                    .rsplit_once(DELIMITER)
                    .ok_or_else(|| corrupt("missing due date"))?;
                Task::deadline(name, date(due)?)
            }
            "E" => {
                let (before_end, end) = rest
                    .rsplit_once(DELIMITER)
                    .ok_or_else(|| corrupt("missing event end"))?;
                let (name, start) = before_end
                    .rsplit_once(DELIMITER)
                    .ok_or_else(|| corrupt("missing event start"))?;
                Task::event(name, date(start)?, date(end)?)
            }
            other => return Err(corrupt(&format!("unknown task type '{other}'"))),
        };

        if task.name().trim().is_empty() {
            return Err(corrupt("empty task name"));
        }
        Ok(task.with_done(done))
    }
}
