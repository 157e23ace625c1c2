pub mod task_dto;

pub use task_dto::{AssignTaskDto, TaskQueueEntryDto, TaskResponseDto, UpdateTaskStatusDto};
