//! Filesystem access for iconpack.
//!
//! Reads icon sources from category directories and writes generated
//! packages to disk. All operations are async on top of `tokio::fs`.
//!
//! # Examples
//!
//! ```no_run
//! use iconpack_core::Category;
//! use iconpack_files::scan_category;
//! use std::path::Path;
//!
//! # async fn example() -> iconpack_core::Result<()> {
//! let category = Category::new("layout")?;
//! let icons = scan_category(Path::new("optimized/icons"), &category).await?;
//! println!("Found {} icons", icons.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod scan;
mod writer;

pub use scan::{MAX_FILE_SIZE, scan_category};
pub use writer::{clear_dir, ensure_write, ensure_write_json, export_generated};
