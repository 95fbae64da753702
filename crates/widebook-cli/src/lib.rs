//! CLI library components for widebook.

pub mod cli;
pub mod logging;
pub mod run;
pub mod summary;
