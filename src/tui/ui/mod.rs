/*
[INPUT]:  TUI app state and snapshots for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or removing panels
*/

mod detail;
mod layout;
mod logs;
mod task_list;

pub mod modal;

pub(in crate::tui) use detail::draw_task_detail;
pub(in crate::tui) use layout::{draw_filter_bar, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_list::draw_task_list;
