// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::kubernetes::transport::RawResponse;
use http::StatusCode;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Resource kind {0} is not registered")]
    UnregisteredKind(String),

    #[error("Kubernetes API error: {0}")]
    Request(Box<RequestError>),

    #[error("Transport error: {0}")]
    Transport(#[from] kube::Error),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to build request: {0}")]
    Http(#[from] http::Error),
}

impl Error {
    /// Status code of the failed exchange, for request errors only
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(err) => Some(err.response.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Record the kind a failed request was addressing
    pub(crate) fn for_kind(self, kind: &str) -> Self {
        match self {
            Error::Request(mut err) => {
                err.kind = Some(kind.to_string());
                Error::Request(err)
            }
            other => other,
        }
    }
}

/// A completed exchange the API server answered with a status code >= 400.
#[derive(Debug)]
pub struct RequestError {
    /// The `message` field of the server's Status body
    pub message: String,
    /// Kind of the resource the request addressed, when known
    pub kind: Option<String>,
    pub response: RawResponse,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kind) = &self.kind {
            write!(f, "{}: ", kind)?;
        }
        write!(f, "{} ({})", self.message, self.response.status)
    }
}

impl std::error::Error for RequestError {}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::Request(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
