pub mod notification_handler;

pub use notification_handler::{
    __path_list_all_finished, __path_list_finished, list_all_finished, list_finished,
};
