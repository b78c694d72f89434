//! Error type shared by every stage of the generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by configuration loading and code synthesis.
///
/// Unsupported candidates and unimplemented interface methods are not errors;
/// they are ordinary outcomes of extraction.
#[derive(Debug, Error)]
pub enum Error {
    /// A capability model names a method the synthesizer has no slot for.
    ///
    /// The extractor and the synthesizer disagree about the capability
    /// interface shape; this is a contract violation, never user input.
    #[error("unknown capability slot `{slot}` in model for `{type_name}`")]
    UnknownCapabilitySlot {
        /// Fully qualified name of the type being rendered.
        type_name: String,
        /// The offending method-status key.
        slot: String,
    },

    /// Two different types would be emitted under the same file name.
    ///
    /// Hint names derive from the declaring file's stem, so this happens
    /// when annotated types live in same-named files in different folders.
    #[error("generated file name `{hint}` for `{second}` is already used by `{first}`")]
    DuplicateHintName {
        /// The colliding hint name.
        hint: String,
        /// Type whose source was kept.
        first: String,
        /// Type whose source was dropped.
        second: String,
    },

    /// Reading a configuration file failed.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for [`GeneratorConfig`](crate::GeneratorConfig).
    #[error("configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value parsed but is unusable.
    #[error("invalid configuration value for `{key}`: {reason}")]
    InvalidConfig {
        /// The configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A language version string could not be parsed.
    #[error("invalid language version: {0}")]
    InvalidLanguageVersion(String),

    /// Writing generated text failed.
    #[error("failed to format generated source: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
