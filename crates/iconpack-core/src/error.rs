//! Error types for iconpack.
//!
//! Every library crate in the workspace reports failures through [`Error`].
//! The CLI wraps these with `anyhow` context before printing them.
//!
//! # Examples
//!
//! ```
//! use iconpack_core::{Error, Result};
//!
//! fn resolve(name: &str) -> Result<()> {
//!     if name != "react" && name != "vue" {
//!         return Err(Error::UnknownPackage {
//!             package: name.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = resolve("svelte").unwrap_err();
//! assert!(err.is_unknown_package());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for iconpack.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed.
    ///
    /// Raised for missing source directories, permission failures and any
    /// other I/O error while reading icons or writing output.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No transformer is registered for the requested package.
    #[error("No transformer found for package '{package}' (expected: react, vue)")]
    UnknownPackage {
        /// The package name that was requested
        package: String,
    },

    /// SVG input could not be parsed or has no root `<svg>` element.
    #[error("Invalid SVG: {reason}")]
    InvalidSvg {
        /// Description of the problem
        reason: String,
    },

    /// Icon file name cannot be turned into a component identifier.
    #[error("Invalid icon file name '{file_name}': {reason}")]
    InvalidIconName {
        /// The offending file name
        file_name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Two icon files in one category map to the same component name.
    #[error("Duplicate component '{component}' in category '{category}'")]
    DuplicateComponent {
        /// Category containing the collision
        category: String,
        /// Component name produced twice
        component: String,
    },

    /// Icon file exceeds the size limit.
    #[error("Icon file {} is too large ({size} bytes, limit {limit})", path.display())]
    FileTooLarge {
        /// Path of the file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },

    /// Processing a single icon failed.
    ///
    /// Wraps the underlying failure with the icon's source path.
    #[error("Failed to process icon {}", path.display())]
    Icon {
        /// Source path of the icon
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// Serialization or template rendering error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::Io`] for the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::Error;
    /// use std::io;
    ///
    /// let err = Error::io("icons/maps", io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_io_error());
    /// assert!(err.to_string().contains("icons/maps"));
    /// ```
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a filesystem error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the requested package has no transformer.
    #[must_use]
    pub const fn is_unknown_package(&self) -> bool {
        matches!(self, Self::UnknownPackage { .. })
    }

    /// Returns `true` if this is an SVG parsing error.
    #[must_use]
    pub const fn is_invalid_svg(&self) -> bool {
        matches!(self, Self::InvalidSvg { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns the innermost error, looking through [`Error::Icon`] wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_core::Error;
    ///
    /// let err = Error::Icon {
    ///     path: "icons/maps/pin.svg".into(),
    ///     source: Box::new(Error::InvalidSvg {
    ///         reason: "no root element".to_string(),
    ///     }),
    /// };
    /// assert!(err.root().is_invalid_svg());
    /// ```
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Icon { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for iconpack operations.
pub type Result<T> = std::result::Result<T, Error>;
