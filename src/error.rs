//! Error handling for boundary-file generation
//!
//! Geometry load failures are recoverable per surface, while invalid flux
//! divisors and filesystem failures abort the whole run before the output
//! file is touched.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for boundary generation operations
pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Error types for boundary generation
#[derive(Error, Debug)]
pub enum BoundaryError {
    /// Geometry file missing or not parseable as STL
    #[error("Error loading STL file {}: {message}", .path.display())]
    GeometryLoad { path: PathBuf, message: String },

    /// Zero, negative, non-finite or missing divisor area for a heat-flux surface
    #[error("Patch area for {surface} is zero or invalid ({area:?} m²), check the STL file")]
    InvalidArea { surface: String, area: Option<f64> },

    /// Directory or file could not be read, created or written
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing errors in configuration files
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl BoundaryError {
    /// Create a geometry load error
    pub fn geometry_load(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::GeometryLoad {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an invalid area error
    pub fn invalid_area(surface: impl Into<String>, area: Option<f64>) -> Self {
        Self::InvalidArea {
            surface: surface.into(),
            area,
        }
    }

    /// Create a filesystem error
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether the run may continue past this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::GeometryLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_area_message_names_surface_and_value() {
        let err = BoundaryError::invalid_area("Ar_Condicionado_1", Some(0.0));
        let message = err.to_string();
        assert!(message.contains("Ar_Condicionado_1"));
        assert!(message.contains("0.0"));
    }

    #[test]
    fn only_geometry_errors_are_recoverable() {
        assert!(BoundaryError::geometry_load("a.stl", "eof").is_recoverable());
        assert!(!BoundaryError::invalid_area("wall", None).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!BoundaryError::filesystem("0/T", io).is_recoverable());
    }
}
