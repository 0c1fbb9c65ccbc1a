use thiserror::Error;

use crate::address::FailureCode;

/// Why a resolver could not produce addresses.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Malformed(String),

    #[error("interface command failed: {0}")]
    Command(String),

    #[error("no interface named {0}")]
    InterfaceNotFound(String),

    #[error("local address lookup is not supported on {0}")]
    UnsupportedPlatform(String),
}

impl ResolveError {
    /// The sentinel this error is reported as inside a report.
    pub fn code(&self) -> FailureCode {
        match self {
            ResolveError::Transport(_) => FailureCode::Transport,
            ResolveError::Status(_) => FailureCode::BadStatus,
            ResolveError::Malformed(_)
            | ResolveError::Command(_)
            | ResolveError::InterfaceNotFound(_)
            | ResolveError::UnsupportedPlatform(_) => FailureCode::General,
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::Malformed(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not deliver report: {0}")]
    Transport(#[from] reqwest::Error),
}
