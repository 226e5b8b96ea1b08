/*
[INPUT]:  Exit confirmation state and key events
[OUTPUT]: Yes/No confirmation modal; Submit means quit
[POS]:    TUI UI modal for exit confirmation
[UPDATE]: When changing exit confirmation behavior
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct ConfirmExitModal {
    focus_index: usize,
}

impl ConfirmExitModal {
    pub(in crate::tui) fn new() -> Self {
        // focus starts on "No" so a stray double Enter does not quit
        Self { focus_index: 1 }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Quit taskdesk?"),
            focus_index: self.focus_index,
            fields: vec![
                Field::Button {
                    label: String::from("Yes"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("No"),
                    action: ModalAction::Cancel,
                },
            ],
            error: None,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        // 'y'/'n' answer directly, everything else goes through the framework
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => ModalAction::Submit,
            KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Cancel,
            _ => {
                let mut modal = self.to_modal();
                let action = handle_modal_key(&mut modal, key);
                self.focus_index = modal.focus_index;
                action
            }
        }
    }
}
