pub mod accounts;
pub mod auth;
pub mod notifications;
pub mod reports;
pub mod tasks;
