mod notice;

pub use notice::CompletionNotice;
