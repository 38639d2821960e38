//! Public error domain

use std::fmt;

use pageload_net::EngineErrorDomain;
use serde::{Deserialize, Serialize};

use crate::error::LoadingInfoError;

/// Category of a load error, as reported to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorDomain {
    /// Error type is not known
    #[default]
    None = 0,
    /// Content cannot be interpreted by the engine
    Internal = 1,
    /// Error results from a faulty network connection
    Connection = 2,
    /// Error is related to the SSL/TLS certificate
    Certificate = 3,
    /// Error is related to the HTTP connection
    Http = 4,
    /// Error is related to the FTP connection
    Ftp = 5,
    /// Error is related to the DNS connection
    Dns = 6,
    /// Error is the HTTP response status code, even in case of success
    HttpStatusCode = 7,
}

// Both enums must stay numerically aligned; a drift fails the build here.
const _: () = {
    let pairs = [
        (ErrorDomain::None as i32, EngineErrorDomain::None as i32),
        (ErrorDomain::Internal as i32, EngineErrorDomain::Internal as i32),
        (ErrorDomain::Connection as i32, EngineErrorDomain::Connection as i32),
        (ErrorDomain::Certificate as i32, EngineErrorDomain::Certificate as i32),
        (ErrorDomain::Http as i32, EngineErrorDomain::Http as i32),
        (ErrorDomain::Ftp as i32, EngineErrorDomain::Ftp as i32),
        (ErrorDomain::Dns as i32, EngineErrorDomain::Dns as i32),
        (ErrorDomain::HttpStatusCode as i32, EngineErrorDomain::HttpStatusCode as i32),
    ];
    assert!(pairs.len() == ErrorDomain::ALL.len());
    assert!(pairs.len() == EngineErrorDomain::ALL.len());

    let mut i = 0;
    while i < pairs.len() {
        assert!(pairs[i].0 == pairs[i].1, "ErrorDomain out of sync with EngineErrorDomain");
        i += 1;
    }
};

impl ErrorDomain {
    /// All members in discriminant order
    pub const ALL: [ErrorDomain; 8] = [
        Self::None,
        Self::Internal,
        Self::Connection,
        Self::Certificate,
        Self::Http,
        Self::Ftp,
        Self::Dns,
        Self::HttpStatusCode,
    ];
}

impl From<EngineErrorDomain> for ErrorDomain {
    fn from(domain: EngineErrorDomain) -> Self {
        match domain {
            EngineErrorDomain::None => Self::None,
            EngineErrorDomain::Internal => Self::Internal,
            EngineErrorDomain::Connection => Self::Connection,
            EngineErrorDomain::Certificate => Self::Certificate,
            EngineErrorDomain::Http => Self::Http,
            EngineErrorDomain::Ftp => Self::Ftp,
            EngineErrorDomain::Dns => Self::Dns,
            EngineErrorDomain::HttpStatusCode => Self::HttpStatusCode,
        }
    }
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&EngineErrorDomain::ALL[*self as usize], f)
    }
}

impl TryFrom<i32> for ErrorDomain {
    type Error = LoadingInfoError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        EngineErrorDomain::try_from(value)
            .map(Self::from)
            .map_err(|_| LoadingInfoError::UnknownErrorDomain(value))
    }
}
