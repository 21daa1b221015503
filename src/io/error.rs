//! Error types for texture loading, transformation, and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum VariationError {
    /// Failed to load a base texture from the filesystem
    ImageLoad {
        /// Path to the texture file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Blend operands differ in shape
    ///
    /// Blending never crops or resizes; a peer whose dimensions differ
    /// from the working image aborts that variation instead.
    DimensionMismatch {
        /// Dimensions of the working image (width, height)
        expected: (u32, u32),
        /// Dimensions of the peer image (width, height)
        found: (u32, u32),
    },

    /// Failed to save a generated variation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for VariationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load texture '{}': {source}", path.display())
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Blend operands differ in shape: {}x{} vs {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export variation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for VariationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, VariationError>;

impl From<std::io::Error> for VariationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VariationError {
    VariationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
