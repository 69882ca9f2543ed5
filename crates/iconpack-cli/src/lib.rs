//! iconpack CLI library.
//!
//! Builds React and Vue icon component packages from directories of SVG
//! files. The binary is a thin wrapper over [`runner::execute`]; the modules
//! are public so they can be tested directly.

#![allow(clippy::missing_errors_doc)]

pub mod build;
pub mod cli;
pub mod config;
pub mod formatters;
pub mod runner;

pub use build::{BuildReport, CategoryReport, build};
pub use cli::Cli;
pub use config::Config;
