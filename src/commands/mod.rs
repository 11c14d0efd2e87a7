//! CLI commands for oralgrade

pub mod calculate;
pub mod dispatch;
pub mod format;
pub mod grade;
pub mod host;
pub mod scale;
