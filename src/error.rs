// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Export(String),
    Input(InputError),
}

/// Validation errors raised by the upload step.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The YouTube URL field was empty after trimming
    EmptyUrl,

    /// The selected file does not carry a recognized video extension
    UnsupportedExtension(String),

    /// The selected file could not be read (missing, permission denied, ...)
    FileUnreadable(String),
}

impl InputError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            InputError::EmptyUrl => "error-upload-empty-url",
            InputError::UnsupportedExtension(_) => "error-upload-unsupported-extension",
            InputError::FileUnreadable(_) => "error-upload-file-unreadable",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyUrl => write!(f, "URL must not be empty"),
            InputError::UnsupportedExtension(ext) => {
                write!(f, "Unsupported video extension: {}", ext)
            }
            InputError::FileUnreadable(msg) => write!(f, "File is not readable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
            Error::Input(e) => write!(f, "Input Error: {}", e),
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Error::Input(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_json_error_produces_export_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn input_error_i18n_keys() {
        assert_eq!(InputError::EmptyUrl.i18n_key(), "error-upload-empty-url");
        assert_eq!(
            InputError::UnsupportedExtension("txt".into()).i18n_key(),
            "error-upload-unsupported-extension"
        );
        assert_eq!(
            InputError::FileUnreadable("gone".into()).i18n_key(),
            "error-upload-file-unreadable"
        );
    }

    #[test]
    fn input_error_display_mentions_extension() {
        let err = InputError::UnsupportedExtension("txt".to_string());
        assert!(format!("{}", err).contains("txt"));
    }
}
