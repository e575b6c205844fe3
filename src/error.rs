//! Error types for randr

use crate::status;
use thiserror::Error;

/// Result type alias using randr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in randr operations
///
/// Every variant carries the native status code that caused it and the
/// decoded `"SYMBOL | description"` diagnostic. Errors are fatal to the
/// failing operation only; a generator remains usable after a
/// `Configuration` or `Generation` error with its last-known-good
/// configuration intact.
#[derive(Error, Debug)]
pub enum Error {
    /// Generator construction failed
    #[error("generator initialization failed: {diagnostic}")]
    Initialization {
        /// Native status code
        status: i32,
        /// Decoded diagnostic string
        diagnostic: String,
    },

    /// A property write was rejected; cached state is unchanged
    #[error("generator configuration rejected: {diagnostic}")]
    Configuration {
        /// Native status code
        status: i32,
        /// Decoded diagnostic string
        diagnostic: String,
    },

    /// A generation call failed; no output is assumed valid
    #[error("generation failed: {diagnostic}")]
    Generation {
        /// Native status code
        status: i32,
        /// Decoded diagnostic string
        diagnostic: String,
    },
}

impl Error {
    pub(crate) fn initialization(status: i32) -> Self {
        Self::Initialization {
            status,
            diagnostic: status::decode(status),
        }
    }

    pub(crate) fn configuration(status: i32) -> Self {
        Self::Configuration {
            status,
            diagnostic: status::decode(status),
        }
    }

    pub(crate) fn generation(status: i32) -> Self {
        Self::Generation {
            status,
            diagnostic: status::decode(status),
        }
    }

    /// The native status code carried by this error.
    pub fn status(&self) -> i32 {
        match self {
            Self::Initialization { status, .. }
            | Self::Configuration { status, .. }
            | Self::Generation { status, .. } => *status,
        }
    }

    /// The decoded `"SYMBOL | description"` diagnostic.
    pub fn diagnostic(&self) -> &str {
        match self {
            Self::Initialization { diagnostic, .. }
            | Self::Configuration { diagnostic, .. }
            | Self::Generation { diagnostic, .. } => diagnostic,
        }
    }
}
