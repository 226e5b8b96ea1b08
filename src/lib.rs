/*
[INPUT]:  Public API exports for taskdesk crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod store;

// Re-export main types for convenience
pub use store::{StoreError, Task, TaskId, TaskStore};
