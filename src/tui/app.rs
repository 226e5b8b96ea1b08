/*
[INPUT]:  TaskStore, log buffer handle, and form submissions from modals
[OUTPUT]: AppState helpers for rendering, selection, filtering, and task control
[POS]:    TUI app state and visible-list derivation
[UPDATE]: When changing filters, tabs, selection rules, or modal flows
*/

use anyhow::{Result, anyhow};
use ratatui::widgets::ListState;

use taskdesk::store::{Task, TaskStore};

use super::LogBufferHandle;
use super::ui::modal::{ConfirmExitModal, TaskDraft, TaskFormModal};

/// View-level predicate applied to the sorted list before rendering.
/// The store itself has no filtering operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Filter {
    All,
    Pending,
    Completed,
}

impl Filter {
    pub(super) fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub(super) fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Tasks,
    Logs,
}

pub(super) enum ActiveModal {
    AddTask(TaskFormModal),
    ConfirmExit(ConfirmExitModal),
}

pub(super) struct AppState {
    pub(super) store: TaskStore,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) filter: Filter,
    pub(super) current_tab: Tab,
    /// Sorted then filtered snapshot backing the rendered list.
    pub(super) visible: Vec<Task>,
    pub(super) list_state: ListState,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(store: TaskStore, log_buffer: LogBufferHandle) -> Self {
        let mut state = Self {
            store,
            log_buffer,
            filter: Filter::All,
            current_tab: Tab::Tasks,
            visible: Vec::new(),
            list_state: ListState::default(),
            status_message: "Ready".to_string(),
            active_modal: None,
        };
        state.refresh_visible();
        state
    }

    /// Re-derives the visible list from the store after any mutation or
    /// filter change, keeping the selection on the same task where possible.
    pub(super) fn refresh_visible(&mut self) {
        let selected_id = self.selected_task().map(|task| task.id);

        self.visible = self
            .store
            .list_sorted()
            .into_iter()
            .filter(|task| self.filter.matches(task))
            .collect();

        if self.visible.is_empty() {
            self.list_state.select(None);
            return;
        }

        let next = selected_id
            .and_then(|id| self.visible.iter().position(|task| task.id == id))
            .or_else(|| {
                self.list_state
                    .selected()
                    .map(|selected| selected.min(self.visible.len() - 1))
            })
            .unwrap_or(0);
        self.list_state.select(Some(next));
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let idx = self.list_state.selected()?;
        self.visible.get(idx)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.visible.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub(super) fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.refresh_visible();
        }
    }

    pub(super) fn cycle_filter(&mut self) {
        let next = match self.filter {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Completed,
            Filter::Completed => Filter::All,
        };
        self.set_filter(next);
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn open_add_task(&mut self) {
        self.active_modal = Some(ActiveModal::AddTask(TaskFormModal::new()));
    }

    pub(super) fn open_confirm_exit(&mut self) {
        self.active_modal = Some(ActiveModal::ConfirmExit(ConfirmExitModal::new()));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    pub(super) fn submit_add_task(&mut self, draft: TaskDraft) -> Result<()> {
        let title = draft.title.clone();
        self.store
            .add(draft.title, draft.description, draft.date, draft.time)?;
        self.refresh_visible();
        self.status_message = format!("task added: {title}");
        Ok(())
    }

    /// Marks the selected visible task as completed.
    ///
    /// The rendered list is sorted and filtered, so the visible position is
    /// resolved through the task id to its storage position first.
    pub(super) fn complete_selected(&mut self) -> Result<()> {
        let task = self
            .selected_task()
            .ok_or_else(|| anyhow!("no task selected"))?;
        let (id, title) = (task.id, task.title.clone());

        let index = self
            .store
            .position_of(id)
            .ok_or_else(|| anyhow!("task no longer in store: {id}"))?;
        self.store.complete(index)?;
        self.refresh_visible();
        self.status_message = format!("task completed: {title}");
        Ok(())
    }

    pub(super) fn delete_selected(&mut self) -> Result<()> {
        let task = self
            .selected_task()
            .ok_or_else(|| anyhow!("no task selected"))?;
        let id = task.id;

        let index = self
            .store
            .position_of(id)
            .ok_or_else(|| anyhow!("task no longer in store: {id}"))?;
        let removed = self.store.remove(index)?;
        self.refresh_visible();
        self.status_message = format!("task deleted: {}", removed.title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::tui::LogBuffer;

    fn draft(title: &str, day: u32, hour: u32) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date"),
            time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
        }
    }

    fn app_with_tasks() -> AppState {
        let log_buffer = Arc::new(Mutex::new(LogBuffer::new(16)));
        let mut app = AppState::new(TaskStore::new(), log_buffer);
        app.submit_add_task(draft("later", 5, 9)).expect("add");
        app.submit_add_task(draft("sooner", 1, 8)).expect("add");
        app
    }

    #[test]
    fn test_visible_list_is_sorted() {
        let app = app_with_tasks();
        let titles: Vec<&str> = app.visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["sooner", "later"]);
    }

    #[test]
    fn test_complete_selected_resolves_storage_position() {
        let mut app = app_with_tasks();
        // select "sooner", which sits at storage position 1
        app.list_state.select(Some(0));
        app.complete_selected().expect("complete");

        assert!(app.store.get(1).expect("task").completed);
        assert!(!app.store.get(0).expect("task").completed);
    }

    #[test]
    fn test_delete_under_pending_filter_targets_visible_task() {
        let mut app = app_with_tasks();
        app.list_state.select(Some(0));
        app.complete_selected().expect("complete sooner");

        app.set_filter(Filter::Pending);
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].title, "later");

        app.list_state.select(Some(0));
        app.delete_selected().expect("delete later");

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(0).expect("task").title, "sooner");
    }

    #[test]
    fn test_filter_completed_view() {
        let mut app = app_with_tasks();
        app.list_state.select(Some(1));
        app.complete_selected().expect("complete later");

        app.set_filter(Filter::Completed);
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].title, "later");

        app.set_filter(Filter::All);
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_selection_follows_task_across_refresh() {
        let mut app = app_with_tasks();
        app.list_state.select(Some(1));
        let selected = app.selected_task().expect("selected").id;

        app.submit_add_task(draft("earliest", 1, 6)).expect("add");
        assert_eq!(app.selected_task().expect("selected").id, selected);
    }

    #[test]
    fn test_actions_without_selection_fail() {
        let log_buffer = Arc::new(Mutex::new(LogBuffer::new(16)));
        let mut app = AppState::new(TaskStore::new(), log_buffer);
        assert!(app.complete_selected().is_err());
        assert!(app.delete_selected().is_err());
    }

    #[test]
    fn test_empty_title_rejected_and_store_unchanged() {
        let mut app = app_with_tasks();
        let result = app.submit_add_task(draft("", 3, 12));
        assert!(result.is_err());
        assert_eq!(app.store.len(), 2);
    }
}
