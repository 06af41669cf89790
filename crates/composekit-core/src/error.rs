//! Error types for composekit-core

use thiserror::Error;

/// Result type alias using composekit-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Composekit
///
/// Detection probes never report "not found" through this type; absence
/// is a boolean result. Only faults in executing a probe, the release
/// source, or the filesystem surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// A detection probe faulted (not "absent")
    #[error("Probe failed: {message}")]
    Probe { message: String },

    /// Release source unreachable or returned a failure status
    #[error("Network error: {message}")]
    Network { message: String },

    /// Release source returned nothing usable
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// No release asset matches this OS/architecture combination
    #[error("No compose asset for platform {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    /// Asset transfer failed
    #[error("Download failed: {message}")]
    Download { message: String },

    /// Folder creation, permission change, or write failure
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl Error {
    /// Create a probe error
    pub fn probe(message: impl Into<String>) -> Self {
        Self::Probe {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create an unsupported-platform error
    pub fn unsupported_platform(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Create a download error
    pub fn download(message: impl Into<String>) -> Self {
        Self::Download {
            message: message.into(),
        }
    }
}
