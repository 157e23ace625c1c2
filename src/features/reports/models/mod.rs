mod report;

pub use report::{DisasterReport, Priority};
