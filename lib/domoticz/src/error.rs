use std::fmt;

#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Url(url::ParseError),
    Json(serde_json::Error),
    Api(String),
    NotFound(String),
    UnknownLevel { idx: String, name: String },
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "http error: {err}"),
            Self::Url(err) => write!(f, "url error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Api(message) => write!(f, "domoticz error: {message}"),
            Self::NotFound(idx) => write!(f, "device {idx} not found"),
            Self::UnknownLevel { idx, name } => {
                write!(f, "device {idx} has no level named {name}")
            }
        }
    }
}

impl std::error::Error for Error {}
