//! Error types for state persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting snapshots.
///
/// Only the explicit file and serialization APIs surface these. The
/// tolerant restore seams ([`Snapshot::apply`](crate::Snapshot::apply),
/// [`blob::decode`](crate::blob::decode)) swallow bad input by contract.
#[derive(Debug, Error)]
pub enum StateError {
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

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
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
}

impl StateError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StateError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StateError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StateError::CreateDir {
            path: path.into(),
            source,
        }
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
    fn factories_produce_the_right_variants() {
        let err = StateError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, StateError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );

        let err = StateError::write_file("/out/path", mock_io_err());
        assert!(
            matches!(err, StateError::WriteFile { ref path, .. } if path == std::path::Path::new("/out/path"))
        );

        let err = StateError::create_dir("/dir/path", mock_io_err());
        assert!(
            matches!(err, StateError::CreateDir { ref path, .. } if path == std::path::Path::new("/dir/path"))
        );
    }

    #[test]
    fn read_file_display() {
        let err = StateError::read_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn write_file_display() {
        let err = StateError::write_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn create_dir_display() {
        let err = StateError::create_dir("/a/b", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to create directory"), "got: {msg}");
        assert!(msg.contains("/a/b"), "got: {msg}");
    }

    #[test]
    fn io_wrapping_variants_expose_source() {
        assert!(StateError::read_file("/x", mock_io_err()).source().is_some());
        assert!(StateError::write_file("/x", mock_io_err()).source().is_some());
        assert!(StateError::create_dir("/x", mock_io_err()).source().is_some());
    }

    #[test]
    fn toml_parse_error_converts() {
        let err: StateError = toml::from_str::<toml::Value>("not = = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, StateError::TomlParse(_)));
        assert!(err.to_string().contains("failed to parse TOML"));
    }
}
