//! Kriya session planner CLI library.
//!
//! This crate provides the CLI interface for the session planner.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, WhatIf};
pub use config::Config;
