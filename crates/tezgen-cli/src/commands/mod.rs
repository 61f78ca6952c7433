//! Command handlers, one module per action.

pub mod completions;
pub mod config;
pub mod create;
