//! Component generation for iconpack.
//!
//! Normalizes SVG icons and transforms them into React or Vue component
//! modules using Handlebars templates.
//!
//! # Architecture
//!
//! - [`svg`]: streaming SVG normalization and element tree parsing
//! - [`transform`]: per-framework render expressions and CommonJS rewriting
//! - [`template_engine`]: module and declaration templates
//! - [`generator`]: per-category package assembly
//!
//! Generated files are returned as [`GeneratedCode`]; writing them to disk
//! is left to the caller.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod svg;
pub mod template_engine;
pub mod transform;
pub mod types;

pub use generator::IconGenerator;
pub use transform::Framework;
pub use types::{ComponentSource, GeneratedCode, GeneratedFile, PackageManifest};
