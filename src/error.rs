// SPDX-License-Identifier: MPL-2.0
use crate::infrastructure::http::ClientBuildError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The HTTP client could not be constructed.
    Client(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Client(_) => "error-client-init",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Client(e) => write!(f, "Client Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ClientBuildError> for Error {
    fn from(err: ClientBuildError) -> Self {
        Error::Client(err.to_string())
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
    fn toml_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn each_variant_has_its_own_message_key() {
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-io");
        assert_eq!(
            Error::Config("x".into()).i18n_key(),
            "notification-config-load-error"
        );
        assert_eq!(Error::Client("x".into()).i18n_key(), "error-client-init");
    }
}
