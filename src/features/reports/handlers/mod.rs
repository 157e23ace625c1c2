pub mod report_handler;

pub use report_handler::{
    __path_delete_report, __path_get_report, __path_list_disaster_types, __path_list_reports,
    __path_set_report_priority, __path_submit_report, delete_report, get_report,
    list_disaster_types, list_reports, set_report_priority, submit_report,
};
