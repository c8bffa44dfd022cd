//! The editor: store, last rendered view, and the update loop.

use tracing::{debug, warn};

use crate::error::EditError;
use crate::field::FieldInput;
use crate::message::Message;
use crate::store::FacultyStore;
use crate::view::{ElementId, View, render};

/// Owns the store and keeps the rendered view in step with it.
///
/// Each [`update`](Self::update) applies one message and then re-renders the
/// whole view, whether or not the mutation succeeded. A failed mutation
/// leaves the store as it was, so the re-render reverts any optimistic
/// control state, and its message is kept as the current notice.
#[derive(Debug, Clone)]
pub struct Editor {
    store: FacultyStore,
    view: View,
    notice: Option<String>,
    render_count: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_store(FacultyStore::new())
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: FacultyStore) -> Self {
        let view = render(&store);
        Self {
            store,
            view,
            notice: None,
            render_count: 1,
        }
    }

    pub fn store(&self) -> &FacultyStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Message from the last rejected edit, cleared by the next update.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Number of renders so far, including the initial one.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Applies one message, then re-renders.
    pub fn update(&mut self, message: Message) -> Result<(), EditError> {
        debug!(?message, "applying message");
        self.notice = None;
        let result = self.apply(message);
        if let Err(err) = &result {
            warn!(error = %err, "edit rejected");
            self.notice = Some(err.to_string());
        }
        self.refresh();
        result
    }

    /// Resolves an element of the current view and applies its message.
    pub fn dispatch(
        &mut self,
        element: ElementId,
        input: impl Into<FieldInput>,
    ) -> Result<(), EditError> {
        match self.view.bindings.resolve(&element) {
            Some(handler) => self.update(handler.message(input.into())),
            None => {
                let err = EditError::UnboundElement(element);
                warn!(error = %err, "dispatch to unbound element");
                self.notice = Some(err.to_string());
                self.refresh();
                Err(err)
            }
        }
    }

    fn apply(&mut self, message: Message) -> Result<(), EditError> {
        match message {
            // =================================================================
            // Faculty list
            // =================================================================
            Message::AddFaculty => {
                self.store.add_faculty();
                Ok(())
            }
            Message::RemoveFaculty(faculty) => self.store.remove_faculty(faculty).map(drop),
            Message::UpdateFaculty {
                faculty,
                field,
                input,
            } => self.store.update_faculty_field(faculty, field, input),

            // =================================================================
            // Subjects
            // =================================================================
            Message::AddSubject { faculty, kind } => {
                self.store.add_subject(faculty, kind).map(drop)
            }
            Message::RemoveSubject { faculty, subject } => {
                self.store.remove_subject(faculty, subject).map(drop)
            }
            Message::UpdateSubject {
                faculty,
                subject,
                field,
                input,
            } => self
                .store
                .update_subject_field(faculty, subject, field, input),
            Message::ToggleHoliday {
                faculty,
                subject,
                day,
                selected,
            } => self
                .store
                .toggle_holiday(faculty, subject, day, selected)
                .map(drop),
        }
    }

    fn refresh(&mut self) {
        self.view = render(&self.store);
        self.render_count += 1;
    }
}
