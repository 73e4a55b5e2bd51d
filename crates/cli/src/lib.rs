//! `stockpile-cli`
//!
//! **Responsibility:** terminal front end for the stock list.
//!
//! This crate provides:
//! - Command-line / environment configuration
//! - A line-oriented shell that renders the list and collects user intents
//!
//! The shell is a **thin layer** over `InventoryStore`; it holds no state of
//! its own beyond the terminal handles.

pub mod config;
pub mod render;
pub mod shell;

pub use config::Cli;
pub use shell::{Intent, Shell, ShellError};
