/*
[INPUT]:  Crossterm key codes from the input thread
[OUTPUT]: AppState mutations and quit signal
[POS]:    TUI key routing, including modal dispatch
[UPDATE]: When changing hotkeys or modal submission flow
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, Filter, Tab};
use super::ui::modal::{ModalAction, TaskDraft};

enum ModalSubmit {
    AddTask(TaskDraft),
    ConfirmExit,
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        return handle_modal_key_event(app, key);
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.open_confirm_exit();
            false
        }
        KeyCode::Char('a') => {
            app.open_add_task();
            false
        }
        KeyCode::Char('c') => {
            if let Err(err) = app.complete_selected() {
                app.status_message = format!("complete task failed: {err}");
            }
            false
        }
        KeyCode::Char('d') => {
            if let Err(err) = app.delete_selected() {
                app.status_message = format!("delete task failed: {err}");
            }
            false
        }
        KeyCode::Tab | KeyCode::Char('l') => {
            app.next_tab();
            false
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
            false
        }
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            false
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Pending);
            false
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Completed);
            false
        }
        KeyCode::Char('t') => {
            app.set_tab(Tab::Tasks);
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) -> bool {
    let (action, submit) = match app.active_modal_mut() {
        Some(ActiveModal::AddTask(modal)) => {
            let action = modal.handle_key(key);
            let submit = if action == ModalAction::Submit {
                match modal.parse() {
                    Ok(draft) => Some(ModalSubmit::AddTask(draft)),
                    Err(message) => {
                        modal.set_error(message);
                        None
                    }
                }
            } else {
                None
            };
            (action, submit)
        }
        Some(ActiveModal::ConfirmExit(modal)) => {
            let action = modal.handle_key(key);
            let submit = (action == ModalAction::Submit).then_some(ModalSubmit::ConfirmExit);
            (action, submit)
        }
        None => return false,
    };

    if action == ModalAction::Cancel {
        app.close_modal();
        return false;
    }

    match submit {
        Some(ModalSubmit::AddTask(draft)) => {
            match app.submit_add_task(draft) {
                Ok(()) => app.close_modal(),
                Err(err) => {
                    // the store can still reject the draft; keep the modal
                    // open and show the message there
                    if let Some(ActiveModal::AddTask(modal)) = app.active_modal_mut() {
                        modal.set_error(err.to_string());
                    }
                }
            }
            false
        }
        Some(ModalSubmit::ConfirmExit) => true,
        None => false,
    }
}
