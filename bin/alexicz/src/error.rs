use std::fmt;

use alexa::PropertyName;

use crate::AdapterKind;

#[derive(Debug)]
pub enum Error {
    Backend(domoticz::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    Payload {
        field: &'static str,
        expected: &'static str,
    },
    MissingEndpoint,
    EndpointId(String),
    Unsupported {
        kind: AdapterKind,
        operation: &'static str,
    },
    Unavailable {
        endpoint: String,
        property: PropertyName,
    },
    Config(String),
}

impl From<domoticz::Error> for Error {
    fn from(err: domoticz::Error) -> Self {
        Self::Backend(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "backend error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Http(err) => write!(f, "http error: {err}"),
            Self::Url(err) => write!(f, "url error: {err}"),
            Self::Payload { field, expected } => {
                write!(f, "payload field {field} must be {expected}")
            }
            Self::MissingEndpoint => write!(f, "directive has no endpoint"),
            Self::EndpointId(err) => write!(f, "invalid endpoint id: {err}"),
            Self::Unsupported { kind, operation } => {
                write!(f, "{kind} endpoints don't support {operation}")
            }
            Self::Unavailable { endpoint, property } => {
                write!(f, "{endpoint} has no {property} value")
            }
            Self::Config(message) => write!(f, "config error: {message}"),
        }
    }
}

impl std::error::Error for Error {}
