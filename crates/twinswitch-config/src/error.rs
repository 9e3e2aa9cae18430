//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;
use twinswitch_core::ColorParseError;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A color attribute could not be parsed
    #[error("invalid color for '{field}': {source}")]
    InvalidColor {
        /// Name of the attribute.
        field: &'static str,
        /// Parser error.
        #[source]
        source: ColorParseError,
    },

    /// A numeric attribute is out of range
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the attribute.
        field: &'static str,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a read error for a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::ReadFile { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn write_file_display() {
        let err = ConfigError::write_file("/a/switch.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/switch.toml"), "got: {msg}");
        assert!(!err.is_not_found());
    }

    #[test]
    fn invalid_color_display_and_source() {
        let err = ConfigError::InvalidColor {
            field: "color_checked",
            source: ColorParseError::UnknownName("mauve".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid color for 'color_checked': unknown color name: mauve"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "density",
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for 'density': must be positive");
        assert!(err.source().is_none());
    }

    #[test]
    fn create_dir_source_is_some() {
        let err = ConfigError::create_dir("/x", mock_io_err());
        assert!(err.source().is_some(), "CreateDir must expose I/O source");
    }
}
