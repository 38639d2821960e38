//! Network error types

use thiserror::Error;

use crate::codes;
use crate::domain::EngineErrorDomain;

/// Network operation result type
pub type NetResult<T> = Result<T, NetError>;

/// Failures the engine reports for a load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Connection reset: {0}")]
    ConnectionReset(String),

    #[error("Timeout")]
    Timeout,

    #[error("Could not resolve host: {0}")]
    NameNotResolved(String),

    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("Too many redirects")]
    TooManyRedirects,

    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    #[error("FTP error: {0}")]
    Ftp(String),

    #[error("Aborted")]
    Aborted,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Unknown error domain: {0}")]
    UnknownErrorDomain(i32),
}

impl NetError {
    /// Numeric engine code; HTTP statuses are reported as-is
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidUrl(_) => codes::ERR_INVALID_URL,
            Self::ConnectionRefused(_) => codes::ERR_CONNECTION_REFUSED,
            Self::ConnectionReset(_) => codes::ERR_CONNECTION_RESET,
            Self::Timeout => codes::ERR_TIMED_OUT,
            Self::NameNotResolved(_) => codes::ERR_NAME_NOT_RESOLVED,
            Self::Certificate(_) => codes::ERR_CERT_AUTHORITY_INVALID,
            Self::TooManyRedirects => codes::ERR_TOO_MANY_REDIRECTS,
            Self::HttpStatus { status } => i32::from(*status),
            Self::Ftp(_) => codes::ERR_FTP_FAILED,
            Self::Aborted => codes::ERR_ABORTED,
            Self::Internal(_) | Self::UnknownErrorDomain(_) => codes::ERR_FAILED,
        }
    }

    /// Domain the engine classifies this error into
    pub fn domain(&self) -> EngineErrorDomain {
        EngineErrorDomain::from_error_code(self.code())
    }
}

/// Entry point for the engine's HTTP stack: fetch failures become engine
/// codes and domains here before they reach a `LoadingInfo`.
impl From<reqwest::Error> for NetError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetError::Timeout
        } else if err.is_connect() {
            NetError::ConnectionRefused(err.to_string())
        } else if err.is_redirect() {
            NetError::TooManyRedirects
        } else if let Some(status) = err.status() {
            NetError::HttpStatus {
                status: status.as_u16(),
            }
        } else if err.is_builder() {
            NetError::InvalidUrl(err.to_string())
        } else {
            NetError::Internal(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetError {
    fn from(err: url::ParseError) -> Self {
        NetError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_keeps_status_as_code() {
        let err = NetError::HttpStatus { status: 404 };
        assert_eq!(err.code(), 404);
        assert_eq!(err.domain(), EngineErrorDomain::HttpStatusCode);
        assert_eq!(err.to_string(), "HTTP error: 404");
    }

    #[test]
    fn test_name_not_resolved_is_dns() {
        let err = NetError::NameNotResolved("example.invalid".into());
        assert_eq!(err.domain(), EngineErrorDomain::Dns);
        assert_eq!(err.domain(), EngineErrorDomain::from_error_code(err.code()));
        assert_eq!(err.to_string(), "Could not resolve host: example.invalid");
    }

    #[test]
    fn test_domains_follow_codes() {
        assert_eq!(NetError::Timeout.domain(), EngineErrorDomain::Internal);
        assert_eq!(
            NetError::ConnectionRefused("x".into()).domain(),
            EngineErrorDomain::Connection
        );
        assert_eq!(
            NetError::Certificate("x".into()).domain(),
            EngineErrorDomain::Certificate
        );
        assert_eq!(NetError::TooManyRedirects.domain(), EngineErrorDomain::Http);
        assert_eq!(NetError::Ftp("x".into()).domain(), EngineErrorDomain::Ftp);
        assert_eq!(NetError::Aborted.code(), codes::ERR_ABORTED);
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: NetError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, NetError::InvalidUrl(_)));
        assert_eq!(err.code(), codes::ERR_INVALID_URL);
        assert_eq!(err.domain(), EngineErrorDomain::Http);
    }

    #[test]
    fn test_from_reqwest_builder_error() {
        let err = reqwest::Client::new().get("http://[::1").build().unwrap_err();
        let err: NetError = err.into();
        assert!(matches!(err, NetError::InvalidUrl(_)));
    }
}
