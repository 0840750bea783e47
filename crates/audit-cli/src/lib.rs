//! CLI library components for the audience audit tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
