//! An editing session: the editor, the submission controller, and the
//! commands that drive them.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, warn};
use ttb_editor::{Editor, Message, validate, workload};
use ttb_submit::{GenerationService, SubmissionController, SubmitOutcome, resolve_redirect};

use crate::command::{Command, parse_line};
use crate::render::{render_help, render_summary, render_view};

/// Whether to keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<S> {
    editor: Editor,
    controller: SubmissionController<S>,
    endpoint: String,
    open_browser: bool,
    echo: bool,
    last_redirect: Option<String>,
}

impl<S: GenerationService> Session<S> {
    pub fn new(controller: SubmissionController<S>, endpoint: impl Into<String>) -> Self {
        Self {
            editor: Editor::new(),
            controller,
            endpoint: endpoint.into(),
            open_browser: false,
            echo: true,
            last_redirect: None,
        }
    }

    /// Open the generated timetable in the system browser after `submit`.
    #[must_use]
    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Print the view after every edit. On by default.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn controller(&self) -> &SubmissionController<S> {
        &self.controller
    }

    /// Redirect target of the last successful submission, verbatim.
    pub fn last_redirect(&self) -> Option<&str> {
        self.last_redirect.as_deref()
    }

    /// Parses and runs one line.
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match parse_line(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    /// Runs every line of a script, stopping at the first failure.
    ///
    /// Errors carry the 1-based line number.
    pub fn run_script(
        &mut self,
        name: &str,
        reader: impl BufRead,
        out: &mut impl Write,
    ) -> Result<Flow> {
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("failed to read {name}"))?;
            let flow = self
                .execute_line(&line, out)
                .with_context(|| format!("{name}:{line_number}: {}", line.trim()))?;
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        let message = match command {
            Command::AddFaculty => Message::AddFaculty,
            Command::RemoveFaculty(faculty) => Message::RemoveFaculty(faculty),
            Command::AddSubject { faculty, kind } => Message::AddSubject { faculty, kind },
            Command::RemoveSubject { faculty, subject } => {
                Message::RemoveSubject { faculty, subject }
            }
            Command::SetFaculty {
                faculty,
                field,
                value,
            } => Message::UpdateFaculty {
                faculty,
                field,
                input: value.into(),
            },
            Command::SetSubject {
                faculty,
                subject,
                field,
                value,
            } => Message::UpdateSubject {
                faculty,
                subject,
                field,
                input: value.into(),
            },
            Command::Holiday {
                faculty,
                subject,
                day,
                selected,
            } => Message::ToggleHoliday {
                faculty,
                subject,
                day,
                selected,
            },
            Command::Show => {
                writeln!(out, "{}", render_view(self.editor.view()))?;
                return Ok(Flow::Continue);
            }
            Command::Summary => {
                writeln!(out, "{}", render_summary(&workload(self.editor.store())))?;
                return Ok(Flow::Continue);
            }
            Command::Validate => {
                validate(self.editor.store())?;
                writeln!(out, "Ready to generate.")?;
                return Ok(Flow::Continue);
            }
            Command::Submit => {
                self.submit(out)?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{}", render_help())?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        // Printed for rejected edits too.
        let result = self.editor.update(message);
        if self.echo {
            self.print_display(out)?;
        }
        result?;
        Ok(Flow::Continue)
    }

    fn print_display(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", render_view(self.editor.view()))?;
        if let Some(notice) = self.editor.notice() {
            writeln!(out, "! {notice}")?;
        }
        Ok(())
    }

    /// Submits the current store and reports the outcome.
    pub fn submit(&mut self, out: &mut impl Write) -> Result<()> {
        match self.controller.submit(self.editor.store()) {
            SubmitOutcome::Navigate(redirect) => {
                let location = resolve_redirect(&self.endpoint, &redirect);
                writeln!(out, "Timetable generated: {location}")?;
                if self.open_browser {
                    info!(%location, "opening browser");
                    if let Err(e) = open::that(&location) {
                        warn!("failed to open {location}: {e}");
                    }
                }
                self.last_redirect = Some(redirect);
                Ok(())
            }
            SubmitOutcome::Failed(err) => Err(anyhow!(err.user_message())),
            SubmitOutcome::Busy => bail!("a submission is already in progress"),
        }
    }
}
