//! Core types and errors for iconpack.
//!
//! This crate provides the foundational types shared by the code generator,
//! the file writer and the command-line interface.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`PackageName`, `Category`, `ComponentName`, `ModuleFormat`)
//! - The `IconAsset` input record
//! - Error hierarchy with contextual information
//! - CLI support types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod types;

pub mod cli;

pub use error::{Error, Result};
pub use types::{
    Category, ComponentName, DEFAULT_CATEGORIES, IconAsset, ModuleFormat, PackageName,
};
