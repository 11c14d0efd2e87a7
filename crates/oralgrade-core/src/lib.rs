//! Oralgrade Core Library
//!
//! Scores oral exam protocols by tallying `+` and `-` marks on list items
//! and maps the resulting percentage onto the academic grade scale.

pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod grade;
pub mod logging;
pub mod score;
