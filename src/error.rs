//! Error types for slidingtext.
//!
//! The rotation state machine itself never fails; errors only surface at
//! the configuration boundary (interval and font size setters, config
//! loading).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slidingtext operations
#[derive(Error, Debug)]
pub enum Error {
    /// Slide interval was zero, negative, or not a finite number
    #[error("slide interval must be a positive number of seconds, got {seconds}")]
    InvalidInterval {
        /// The rejected value.
        seconds: f64,
    },

    /// Font size was zero, negative, or not a finite number
    #[error("font size must be a positive number of points, got {size}")]
    InvalidFontSize {
        /// The rejected value.
        size: f64,
    },

    /// Configuration values are well-formed TOML but semantically invalid
    #[error("Configuration error: {reason}")]
    Config {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Configuration is not valid TOML or has mistyped fields
    #[error("Failed to parse configuration: {source}")]
    ConfigParse {
        /// The underlying TOML error.
        #[from]
        source: toml::de::Error,
    },

    /// Reading a configuration file failed
    #[error("Failed to read {path:?}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Result type alias for slidingtext operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid interval error
    pub fn invalid_interval(seconds: f64) -> Self {
        Self::InvalidInterval { seconds }
    }

    /// Create an invalid font size error
    pub fn invalid_font_size(size: f64) -> Self {
        Self::InvalidFontSize { size }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an I/O error bound to the file being read
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_interval(-1.0);
        assert_eq!(
            err.to_string(),
            "slide interval must be a positive number of seconds, got -1"
        );

        let err = Error::invalid_font_size(0.0);
        assert_eq!(
            err.to_string(),
            "font size must be a positive number of points, got 0"
        );

        let err = Error::config("texts must not be empty");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("texts must not be empty"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("slide_interval = = 3").unwrap_err();
        let err: Error = parse_err.into();

        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = Error::io(
            "/nope/slidingtext.toml",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("/nope/slidingtext.toml"));
    }
}
