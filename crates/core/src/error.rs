//! Loading info error types

use thiserror::Error;

/// Loading info result type
pub type LoadingInfoResult<T> = Result<T, LoadingInfoError>;

/// Errors raised while turning raw engine values into a `LoadingInfo`
#[derive(Debug, Error)]
pub enum LoadingInfoError {
    #[error("Unknown load status: {0}")]
    UnknownLoadStatus(i32),

    #[error("Unknown error domain: {0}")]
    UnknownErrorDomain(i32),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
