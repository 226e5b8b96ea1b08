/*
[INPUT]:  Add-task form state and key events
[OUTPUT]: Validated TaskDraft ready for the store, or an in-modal error
[POS]:    TUI UI modal for task creation
[UPDATE]: When changing form fields or validation rules
*/

use chrono::{NaiveDate, NaiveTime};
use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) const DATE_FORMAT: &str = "%d/%m/%Y";
pub(in crate::tui) const TIME_FORMAT: &str = "%H:%M";

/// Format-validated task fields, produced only by [`TaskFormModal::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::tui) struct TaskDraft {
    pub(in crate::tui) title: String,
    pub(in crate::tui) description: String,
    pub(in crate::tui) date: NaiveDate,
    pub(in crate::tui) time: NaiveTime,
}

pub(in crate::tui) struct TaskFormModal {
    title: String,
    description: String,
    date: String,
    time: String,
    focus_index: usize,
    error: Option<String>,
}

impl TaskFormModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            focus_index: 0,
            error: None,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Add Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title"),
                    value: self.title.clone(),
                },
                Field::TextInput {
                    label: String::from("Description"),
                    value: self.description.clone(),
                },
                Field::TextInput {
                    label: String::from("Date (DD/MM/YYYY)"),
                    value: self.date.clone(),
                },
                Field::TextInput {
                    label: String::from("Time (HH:MM)"),
                    value: self.time.clone(),
                },
                Field::Button {
                    label: String::from("Create"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
            error: self.error.clone(),
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    /// Validates the raw field values. Malformed input never reaches the
    /// store; the error stays in the modal and the form keeps its values.
    pub(in crate::tui) fn parse(&self) -> Result<TaskDraft, String> {
        if self.title.is_empty() {
            return Err("title cannot be empty".to_string());
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| "date must be in DD/MM/YYYY format".to_string())?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT)
            .map_err(|_| "time must be in HH:MM format".to_string())?;

        Ok(TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date,
            time,
        })
    }

    pub(in crate::tui) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.title = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(1) {
            self.description = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(2) {
            self.date = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(3) {
            self.time = value.clone();
        }
    }
}
