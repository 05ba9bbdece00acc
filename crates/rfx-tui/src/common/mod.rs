pub mod reveal;
pub mod task;
pub mod text;

pub use reveal::run_reveal;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
