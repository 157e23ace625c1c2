mod task;
mod task_queue;

pub use task::{AssignedTask, TaskStatus};
pub use task_queue::TaskQueueEntry;
