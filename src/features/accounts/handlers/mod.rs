pub mod account_handler;

pub use account_handler::{
    __path_delete_account, __path_list_accounts, __path_update_account_role, delete_account,
    list_accounts, update_account_role,
};
