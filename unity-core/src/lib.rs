//! Unity Core
//!
//! Shared contract between resource adapters and the query API manager that
//! executes their calls, plus helpers for reading the manager's response
//! documents

pub mod document;
pub mod manager;
