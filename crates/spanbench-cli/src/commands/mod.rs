//! CLI command implementations.

pub mod info;
pub mod report;
pub mod run;
pub mod solve;
