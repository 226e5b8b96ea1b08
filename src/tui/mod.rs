/*
[INPUT]:  TaskStore and tracing log buffer
[OUTPUT]: Ratatui-based TUI run loop and log buffer utilities
[POS]:    TUI module root for the taskdesk binary
[UPDATE]: When changing the TUI module layout
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
