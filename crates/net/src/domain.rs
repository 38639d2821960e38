//! Engine-side error domain classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::error::NetError;

/// Category of a failure as classified by the engine.
///
/// Discriminants are part of the contract with `pageload-core`, which
/// mirrors this enum member-for-member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum EngineErrorDomain {
    /// No error, or the category is unknown
    #[default]
    None = 0,
    /// Content could not be interpreted by the engine
    Internal = 1,
    /// Faulty network connection
    Connection = 2,
    /// SSL/TLS certificate problem
    Certificate = 3,
    /// HTTP protocol error
    Http = 4,
    /// FTP protocol error
    Ftp = 5,
    /// Name resolution failure
    Dns = 6,
    /// The code is an HTTP response status, even a successful one
    HttpStatusCode = 7,
}

impl EngineErrorDomain {
    /// All members in discriminant order
    pub const ALL: [EngineErrorDomain; 8] = [
        Self::None,
        Self::Internal,
        Self::Connection,
        Self::Certificate,
        Self::Http,
        Self::Ftp,
        Self::Dns,
        Self::HttpStatusCode,
    ];

    /// Classify an engine error code.
    ///
    /// Positive codes are HTTP statuses. Negative codes are net errors,
    /// grouped in blocks of one hundred, except resolver failures which
    /// sit in the connection block but are reported as DNS errors.
    pub fn from_error_code(code: i32) -> Self {
        if code > 0 {
            return Self::HttpStatusCode;
        }
        if code == codes::OK {
            return Self::None;
        }
        if code == codes::ERR_NAME_NOT_RESOLVED {
            return Self::Dns;
        }

        match code.unsigned_abs() / 100 {
            0 => Self::Internal,
            1 => Self::Connection,
            2 => Self::Certificate,
            3 => Self::Http,
            4 => Self::Internal, // cache
            6 => Self::Ftp,
            7 => Self::Certificate, // certificate manager
            8 => Self::Dns,
            _ => Self::Internal,
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Internal => "internal",
            Self::Connection => "connection",
            Self::Certificate => "certificate",
            Self::Http => "http",
            Self::Ftp => "ftp",
            Self::Dns => "dns",
            Self::HttpStatusCode => "http-status-code",
        }
    }
}

impl fmt::Display for EngineErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for EngineErrorDomain {
    type Error = NetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|domain| *domain as i32 == value)
            .ok_or(NetError::UnknownErrorDomain(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_codes_are_http_status() {
        assert_eq!(EngineErrorDomain::from_error_code(200), EngineErrorDomain::HttpStatusCode);
        assert_eq!(EngineErrorDomain::from_error_code(404), EngineErrorDomain::HttpStatusCode);
    }

    #[test]
    fn test_zero_is_no_error() {
        assert_eq!(EngineErrorDomain::from_error_code(codes::OK), EngineErrorDomain::None);
    }

    #[test]
    fn test_net_error_ranges() {
        let cases = [
            (codes::ERR_FAILED, EngineErrorDomain::Internal),
            (codes::ERR_ABORTED, EngineErrorDomain::Internal),
            (codes::ERR_CONNECTION_REFUSED, EngineErrorDomain::Connection),
            (codes::ERR_CONNECTION_RESET, EngineErrorDomain::Connection),
            (codes::ERR_INTERNET_DISCONNECTED, EngineErrorDomain::Connection),
            (codes::ERR_NAME_NOT_RESOLVED, EngineErrorDomain::Dns),
            (codes::ERR_CERT_DATE_INVALID, EngineErrorDomain::Certificate),
            (codes::ERR_TOO_MANY_REDIRECTS, EngineErrorDomain::Http),
            (codes::ERR_CACHE_MISS, EngineErrorDomain::Internal),
            (codes::ERR_FTP_FAILED, EngineErrorDomain::Ftp),
            (-701, EngineErrorDomain::Certificate),
            (codes::ERR_DNS_TIMED_OUT, EngineErrorDomain::Dns),
            (-512, EngineErrorDomain::Internal),
            (-9999, EngineErrorDomain::Internal),
        ];

        for (code, expected) in cases {
            assert_eq!(EngineErrorDomain::from_error_code(code), expected, "code {}", code);
        }
    }

    #[test]
    fn test_extreme_codes_do_not_overflow() {
        assert_eq!(EngineErrorDomain::from_error_code(i32::MIN), EngineErrorDomain::Internal);
        assert_eq!(EngineErrorDomain::from_error_code(i32::MAX), EngineErrorDomain::HttpStatusCode);
    }

    #[test]
    fn test_try_from_raw() {
        assert_eq!(EngineErrorDomain::try_from(6).unwrap(), EngineErrorDomain::Dns);
        assert!(matches!(
            EngineErrorDomain::try_from(8),
            Err(NetError::UnknownErrorDomain(8))
        ));
    }

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, domain) in EngineErrorDomain::ALL.iter().enumerate() {
            assert_eq!(*domain as i32, i as i32);
        }
    }
}
