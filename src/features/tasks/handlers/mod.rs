pub mod task_handler;

pub use task_handler::{
    __path_assign_task, __path_delete_task, __path_list_departments, __path_list_tasks,
    __path_update_report_tasks_status, __path_update_task_status, assign_task, delete_task,
    list_departments, list_tasks, update_report_tasks_status, update_task_status,
};
