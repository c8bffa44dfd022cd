//! Line-oriented editing commands.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. Indices are 0-based. For `set-faculty` and `set-subject` the
//! value is the rest of the line after the field name, with one separating
//! space removed, so it may be empty or contain spaces.

use thiserror::Error;
use ttb_editor::{FacultyField, SubjectField};
use ttb_model::{SubjectKind, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddFaculty,
    RemoveFaculty(usize),
    AddSubject {
        faculty: usize,
        kind: SubjectKind,
    },
    RemoveSubject {
        faculty: usize,
        subject: usize,
    },
    SetFaculty {
        faculty: usize,
        field: FacultyField,
        value: String,
    },
    SetSubject {
        faculty: usize,
        subject: usize,
        field: SubjectField,
        value: String,
    },
    Holiday {
        faculty: usize,
        subject: usize,
        day: Weekday,
        selected: bool,
    },
    Show,
    Summary,
    Validate,
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: {argument} must be a non-negative integer, got {value:?}")]
    InvalidIndex {
        command: &'static str,
        argument: &'static str,
        value: String,
    },

    #[error("{command}: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },

    #[error("{command}: unexpected argument {value:?}")]
    UnexpectedArgument { command: &'static str, value: String },
}

/// Usage lines, as printed by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("add-faculty", "append a faculty member"),
    ("remove-faculty F", "remove faculty F"),
    ("add-subject F theory|lab", "append a subject to faculty F"),
    ("remove-subject F S", "remove subject S of faculty F"),
    ("set-faculty F FIELD VALUE...", "write a faculty field"),
    ("set-subject F S FIELD VALUE...", "write a subject field"),
    ("holiday F S DAY on|off", "select or clear a holiday"),
    ("show", "print the editor view"),
    ("summary", "print the teaching workload"),
    ("validate", "check the store before submitting"),
    ("submit", "validate and send to the generation service"),
    ("help", "print this list"),
    ("quit", "leave the editor"),
];

/// Parses one line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let mut args = Args::new(line);
    let Some(name) = args.next_token() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "add-faculty" => args.finish("add-faculty", Command::AddFaculty)?,
        "remove-faculty" => {
            const CMD: &str = "remove-faculty";
            let faculty = args.index(CMD, "faculty index")?;
            args.finish(CMD, Command::RemoveFaculty(faculty))?
        }
        "add-subject" => {
            const CMD: &str = "add-subject";
            let faculty = args.index(CMD, "faculty index")?;
            let kind = args
                .required(CMD, "subject type")?
                .parse::<SubjectKind>()
                .map_err(|e| invalid(CMD, &e))?;
            args.finish(CMD, Command::AddSubject { faculty, kind })?
        }
        "remove-subject" => {
            const CMD: &str = "remove-subject";
            let faculty = args.index(CMD, "faculty index")?;
            let subject = args.index(CMD, "subject index")?;
            args.finish(CMD, Command::RemoveSubject { faculty, subject })?
        }
        "set-faculty" => {
            const CMD: &str = "set-faculty";
            let faculty = args.index(CMD, "faculty index")?;
            let field = args
                .required(CMD, "field name")?
                .parse::<FacultyField>()
                .map_err(|e| invalid(CMD, &e))?;
            Command::SetFaculty {
                faculty,
                field,
                value: args.value(),
            }
        }
        "set-subject" => {
            const CMD: &str = "set-subject";
            let faculty = args.index(CMD, "faculty index")?;
            let subject = args.index(CMD, "subject index")?;
            let field = args
                .required(CMD, "field name")?
                .parse::<SubjectField>()
                .map_err(|e| invalid(CMD, &e))?;
            Command::SetSubject {
                faculty,
                subject,
                field,
                value: args.value(),
            }
        }
        "holiday" => {
            const CMD: &str = "holiday";
            let faculty = args.index(CMD, "faculty index")?;
            let subject = args.index(CMD, "subject index")?;
            let day = args
                .required(CMD, "day")?
                .parse::<Weekday>()
                .map_err(|e| invalid(CMD, &e))?;
            let selected = match args.required(CMD, "on|off")?.to_ascii_lowercase().as_str() {
                "on" => true,
                "off" => false,
                other => {
                    return Err(ParseError::InvalidArgument {
                        command: CMD,
                        message: format!("expected on or off, got {other:?}"),
                    });
                }
            };
            args.finish(
                CMD,
                Command::Holiday {
                    faculty,
                    subject,
                    day,
                    selected,
                },
            )?
        }
        "show" => args.finish("show", Command::Show)?,
        "summary" => args.finish("summary", Command::Summary)?,
        "validate" => args.finish("validate", Command::Validate)?,
        "submit" => args.finish("submit", Command::Submit)?,
        "help" => args.finish("help", Command::Help)?,
        "quit" | "exit" => args.finish("quit", Command::Quit)?,
        _ => return Err(ParseError::UnknownCommand(name.to_string())),
    };
    Ok(Some(command))
}

fn invalid(command: &'static str, err: &impl std::fmt::Display) -> ParseError {
    ParseError::InvalidArgument {
        command,
        message: err.to_string(),
    }
}

/// Whitespace tokenizer that keeps the unparsed remainder.
struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn required(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<&'a str, ParseError> {
        self.next_token()
            .ok_or(ParseError::MissingArgument { command, argument })
    }

    fn index(&mut self, command: &'static str, argument: &'static str) -> Result<usize, ParseError> {
        let token = self.required(command, argument)?;
        token.parse().map_err(|_| ParseError::InvalidIndex {
            command,
            argument,
            value: token.to_string(),
        })
    }

    /// The remainder after one separating whitespace character.
    fn value(self) -> String {
        let mut chars = self.rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str().to_string(),
            _ => self.rest.to_string(),
        }
    }

    fn finish(mut self, command: &'static str, parsed: Command) -> Result<Command, ParseError> {
        match self.next_token() {
            Some(extra) => Err(ParseError::UnexpectedArgument {
                command,
                value: extra.to_string(),
            }),
            None => Ok(parsed),
        }
    }
}
