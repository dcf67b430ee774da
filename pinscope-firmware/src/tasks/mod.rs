//! Embassy async tasks

pub mod report;

pub use report::report_task;
