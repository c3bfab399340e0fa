//! Error types for the burnish pipeline.
//!
//! This module defines semantic error variants that identify which input
//! family or filesystem operation failed. Each error includes recovery hints
//! where applicable.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling arguments or normalising output.
#[derive(Debug, Error)]
pub enum BurnishError {
    /// An input family required exactly one path but matched none.
    #[error("no path found for {family}: exactly one is required")]
    MissingSingleton {
        /// Logical name of the input family that came up empty.
        family: String,
    },

    /// An input family required exactly one path but matched several.
    #[error("{family} matched more than one path where exactly one is required: {candidates:?}")]
    AmbiguousSingleton {
        /// Logical name of the ambiguous input family.
        family: String,
        /// The paths that matched.
        candidates: Vec<Utf8PathBuf>,
    },

    /// A system property key was inserted twice into one argument map.
    #[error("duplicate system property {key}")]
    DuplicateProperty {
        /// The repeated property key.
        key: String,
    },

    /// A distribution name could not be derived from the directory layout.
    #[error("cannot derive a distribution name from {path}: too few ancestor directories")]
    NameNotDerivable {
        /// The path whose ancestors were exhausted.
        path: Utf8PathBuf,
    },

    /// Module coordinates contained an empty or unsafe component.
    #[error("invalid module coordinates {value}: {reason}")]
    InvalidCoordinates {
        /// The offending group or module value.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// An expected publication descriptor was not found.
    #[error("descriptor not found at {path}; publish the module locally first")]
    DescriptorMissing {
        /// Path where the descriptor was expected.
        path: Utf8PathBuf,
    },

    /// A required publishing credential is absent or empty.
    #[error("{name} is not set!")]
    MissingCredential {
        /// Name of the missing credential value.
        name: &'static str,
    },

    /// The injected publish step reported a failure.
    #[error("publish step failed: {reason}")]
    PublishFailed {
        /// Description of the publish failure.
        reason: String,
    },

    /// A publication digest string was not well formed.
    #[error("invalid publication digest: {reason}")]
    InvalidDigest {
        /// Description of the validation failure.
        reason: String,
    },

    /// A filesystem path was not valid UTF-8.
    #[error("path {path:?} is not valid UTF-8")]
    NonUtf8Path {
        /// The rejected path.
        path: std::path::PathBuf,
    },

    /// A file could not be read.
    #[error("failed to read {path}")]
    ReadFailed {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {path}")]
    WriteFailed {
        /// Path of the unwritable file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A module directory could not be deleted.
    #[error("failed to delete {path}")]
    CleanFailed {
        /// Path of the directory that resisted deletion.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory tree could not be traversed.
    #[error("failed to scan {path}")]
    ScanFailed {
        /// Root of the unscannable tree.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration at {path}: {reason}")]
    InvalidConfig {
        /// Path to the rejected configuration file.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// An I/O operation failed outside any path-specific context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`BurnishError`].
pub type Result<T> = std::result::Result<T, BurnishError>;
