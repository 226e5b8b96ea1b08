/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When changing modal fields, focus handling, or rendering
*/

mod confirm_exit;
mod task_form;

pub(in crate::tui) use confirm_exit::ConfirmExitModal;
pub(in crate::tui) use task_form::{DATE_FORMAT, TIME_FORMAT, TaskDraft, TaskFormModal};

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
    pub(super) error: Option<String>,
}

pub(in crate::tui) enum Field {
    TextInput { label: String, value: String },
    Button { label: String, action: ModalAction },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = modal
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let content = match field {
                Field::TextInput { label, value } => format!("{label}: {value}"),
                Field::Button { label, .. } => format!("[{label}]"),
            };
            let style = if index == modal.focus_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(content, style))
        })
        .collect();

    if let Some(error) = modal.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            if !modal.fields.is_empty() {
                modal.focus_index = (modal.focus_index + 1) % modal.fields.len();
            }
            ModalAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            if !modal.fields.is_empty() {
                modal.focus_index = (modal.focus_index + modal.fields.len() - 1) % modal.fields.len();
            }
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => {
            if let Some(Field::Button { action, .. }) = modal.fields.get(modal.focus_index) {
                return *action;
            }
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal_with_input() -> Modal {
        Modal {
            title: String::from("Test"),
            focus_index: 0,
            fields: vec![
                Field::TextInput {
                    label: String::from("Name"),
                    value: String::new(),
                },
                Field::Button {
                    label: String::from("OK"),
                    action: ModalAction::Submit,
                },
            ],
            error: None,
        }
    }

    #[test]
    fn test_typing_edits_focused_text_input() {
        let mut modal = modal_with_input();
        handle_modal_key(&mut modal, KeyCode::Char('h'));
        handle_modal_key(&mut modal, KeyCode::Char('i'));
        handle_modal_key(&mut modal, KeyCode::Backspace);
        match &modal.fields[0] {
            Field::TextInput { value, .. } => assert_eq!(value, "h"),
            _ => panic!("expected text input"),
        }
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut modal = modal_with_input();
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focus_index, 1);
        handle_modal_key(&mut modal, KeyCode::Down);
        assert_eq!(modal.focus_index, 0);
        handle_modal_key(&mut modal, KeyCode::Up);
        assert_eq!(modal.focus_index, 1);
    }

    #[test]
    fn test_enter_on_button_returns_its_action() {
        let mut modal = modal_with_input();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::None);
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::Submit);
    }

    #[test]
    fn test_esc_always_cancels() {
        let mut modal = modal_with_input();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Esc), ModalAction::Cancel);
    }
}
