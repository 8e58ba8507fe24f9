// File: ./src/command/parser.rs
// Turns one line of user input into a Command
use crate::command::Command;
use crate::error::{DownyError, Result};
use crate::model::parser::parse_datetime;
use std::num::IntErrorKind;
use std::str::FromStr;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

impl Command {
    /// Never touches the list or the disk. Every line gives either a command or
    /// the reason it is not one.
    pub fn parse(input: &str) -> Result<Self> {
        let line = input.trim();
        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((k, rest)) => (k, rest.trim()),
            None => (line, ""),
        };

        let cmd = match keyword {
            "list" => Command::List,
            "bye" => Command::Exit,
            "help" => Command::Help,
            "mark" => Command::Mark(parse_task_number(args)?),
            "unmark" => Command::Unmark(parse_task_number(args)?),
            "delete" => Command::Delete(parse_task_number(args)?),
            "todo" => {
                if args.is_empty() {
                    return Err(DownyError::EmptyDescription("todo"));
                }
                Command::ToDo {
                    name: args.to_string(),
                }
            }
            "deadline" => {
                let (name, due) = split_marker(args, BY).ok_or(DownyError::MissingArgument(BY))?;
                let name = non_blank_name(name, "deadline")?;
                let due = non_blank(due, "dueDate")?;
                Command::Deadline {
                    name,
                    due: parse_datetime(due)?,
                }
            }
            "event" => {
                let (name, times) =
                    split_marker(args, FROM).ok_or(DownyError::MissingArgument(FROM))?;
                let (start, end) = split_marker(times, TO).ok_or(DownyError::MissingArgument(TO))?;
                let name = non_blank_name(name, "event")?;
                let start = parse_datetime(non_blank(start, "startTime")?)?;
                let end = parse_datetime(non_blank(end, "endTime")?)?;
                if end < start {
                    return Err(DownyError::InvalidEventRange);
                }
                Command::Event { name, start, end }
            }
            "find" => Command::Find {
                keyword: non_blank(args, "keyword")?.to_string(),
            },
            other => return Err(DownyError::UnknownCommand(other.to_string())),
        };
        tracing::debug!(?cmd, "parsed command");
        Ok(cmd)
    }
}

impl FromStr for Command {
    type Err = DownyError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

/// Splits around the first `marker` that stands as a word of its own, so
/// `/bylaws` or `/fromage` inside a description are not taken for it.
fn split_marker<'a>(args: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    args.match_indices(marker).find_map(|(at, _)| {
        let before = &args[..at];
        let after = &args[at + marker.len()..];
        let starts_word = before.is_empty() || before.ends_with(char::is_whitespace);
        let ends_word = after.is_empty() || after.starts_with(char::is_whitespace);
        (starts_word && ends_word).then_some((before, after))
    })
}

fn non_blank<'a>(part: &'a str, what: &'static str) -> Result<&'a str> {
    let part = part.trim();
    if part.is_empty() {
        Err(DownyError::MissingArgument(what))
    } else {
        Ok(part)
    }
}

fn non_blank_name(part: &str, kind: &'static str) -> Result<String> {
    let part = part.trim();
    if part.is_empty() {
        Err(DownyError::EmptyDescription(kind))
    } else {
        Ok(part.to_string())
    }
}

/// Numbers too large for i64 saturate, so the list rejects them as out of range
/// instead of them being mistaken for non-numbers.
fn parse_task_number(arg: &str) -> Result<i64> {
    let arg = non_blank(arg, "taskNumber")?;
    match arg.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(DownyError::InvalidArgument("taskNumber must be a number")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> chrono::NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    #[test]
    fn zero_argument_commands_ignore_trailing_text() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("  list  everything ").unwrap(), Command::List);
        assert_eq!(Command::parse("bye now").unwrap(), Command::Exit);
        assert_eq!(Command::parse("help me").unwrap(), Command::Help);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(matches!(
            Command::parse("LIST"),
            Err(DownyError::UnknownCommand(k)) if k == "LIST"
        ));
        assert!(matches!(
            Command::parse("fly me to the moon"),
            Err(DownyError::UnknownCommand(k)) if k == "fly"
        ));
        assert!(matches!(Command::parse("   "), Err(DownyError::UnknownCommand(_))));
    }

    #[test]
    fn task_numbers() {
        assert_eq!(Command::parse("mark 3").unwrap(), Command::Mark(3));
        assert_eq!(Command::parse("unmark  12 ").unwrap(), Command::Unmark(12));
        // Bounds are checked when executing, not here
        assert_eq!(Command::parse("delete 0").unwrap(), Command::Delete(0));
        assert_eq!(Command::parse("delete -2").unwrap(), Command::Delete(-2));
        assert_eq!(
            Command::parse("mark 99999999999999999999999").unwrap(),
            Command::Mark(i64::MAX)
        );

        assert!(matches!(
            Command::parse("mark one"),
            Err(DownyError::InvalidArgument("taskNumber must be a number"))
        ));
        assert!(matches!(
            Command::parse("delete 1.5"),
            Err(DownyError::InvalidArgument(_))
        ));
        assert!(matches!(
            Command::parse("unmark"),
            Err(DownyError::MissingArgument("taskNumber"))
        ));
    }

    #[test]
    fn todo() {
        assert_eq!(
            Command::parse("todo  Buy milk ").unwrap(),
            Command::ToDo {
                name: "Buy milk".to_string()
            }
        );
        assert!(matches!(
            Command::parse("todo    "),
            Err(DownyError::EmptyDescription("todo"))
        ));
    }

    #[test]
    fn deadline() {
        assert_eq!(
            Command::parse("deadline Report /by 2024-01-01 1000").unwrap(),
            Command::Deadline {
                name: "Report".to_string(),
                due: dt("2024-01-01 1000"),
            }
        );
        assert!(matches!(
            Command::parse("deadline   /by 2024-01-01 1000"),
            Err(DownyError::EmptyDescription("deadline"))
        ));
        assert!(matches!(
            Command::parse("deadline Report"),
            Err(DownyError::MissingArgument("/by"))
        ));
        assert!(matches!(
            Command::parse("deadline Report /by  "),
            Err(DownyError::MissingArgument("dueDate"))
        ));
        assert!(matches!(
            Command::parse("deadline Report /by notadate"),
            Err(DownyError::InvalidDateFormat(s)) if s == "notadate"
        ));
        assert!(matches!(
            Command::parse("deadline Report /by 2024-01-01 1000 sharp"),
            Err(DownyError::InvalidDateFormat(s)) if s == "2024-01-01 1000 sharp"
        ));
    }

    #[test]
    fn markers_only_count_as_whole_words() {
        assert_eq!(
            Command::parse("deadline Read /bylaws /by 2024-01-01 1000").unwrap(),
            Command::Deadline {
                name: "Read /bylaws".to_string(),
                due: dt("2024-01-01 1000"),
            }
        );
        assert_eq!(
            Command::parse("event Cheese /fromage /from 2024-03-05 1400 /to 2024-03-05 1500").unwrap(),
            Command::Event {
                name: "Cheese /fromage".to_string(),
                start: dt("2024-03-05 1400"),
                end: dt("2024-03-05 1500"),
            }
        );
        assert!(matches!(
            Command::parse("deadline Wash/bycycle"),
            Err(DownyError::MissingArgument("/by"))
        ));
    }

    #[test]
    fn event() {
        assert_eq!(
            Command::parse("event Meeting /from 2024-03-05 1400 /to 2024-03-05 1630").unwrap(),
            Command::Event {
                name: "Meeting".to_string(),
                start: dt("2024-03-05 1400"),
                end: dt("2024-03-05 1630"),
            }
        );
        // A zero-length event is fine
        assert!(Command::parse("event Ping /from 2024-03-05 1400 /to 2024-03-05 1400").is_ok());
    }

    #[test]
    fn event_failures() {
        let cases: &[(&str, fn(&DownyError) -> bool)] = &[
            ("event Meeting", |e| matches!(e, DownyError::MissingArgument("/from"))),
            ("event Meeting /from 2024-03-05 1400", |e| {
                matches!(e, DownyError::MissingArgument("/to"))
            }),
            ("event Meeting /to 2024-03-05 1400 /from 2024-03-05 1300", |e| {
                matches!(e, DownyError::MissingArgument("/to"))
            }),
            ("event  /from 2024-03-05 1400 /to 2024-03-05 1500", |e| {
                matches!(e, DownyError::EmptyDescription("event"))
            }),
            ("event Meeting /from  /to 2024-03-05 1500", |e| {
                matches!(e, DownyError::MissingArgument("startTime"))
            }),
            ("event Meeting /from 2024-03-05 1400 /to", |e| {
                matches!(e, DownyError::MissingArgument("endTime"))
            }),
            ("event Meeting /from later /to 2024-03-05 1500", |e| {
                matches!(e, DownyError::InvalidDateFormat(_))
            }),
            ("event Meeting /from 2024-03-05 1400 /to notadate", |e| {
                matches!(e, DownyError::InvalidDateFormat(s) if s == "notadate")
            }),
            ("event Meeting /from 2024-03-05 1400 /to 2024-03-05 1300", |e| {
                matches!(e, DownyError::InvalidEventRange)
            }),
        ];
        for (line, check) in cases {
            let err = Command::parse(line).unwrap_err();
            assert!(check(&err), "{line:?} gave {err:?}");
        }
    }

    #[test]
    fn find() {
        assert_eq!(
            "find  milk ".parse::<Command>().unwrap(),
            Command::Find {
                keyword: "milk".to_string()
            }
        );
        assert!(matches!(
            Command::parse("find"),
            Err(DownyError::MissingArgument("keyword"))
        ));
    }
}
