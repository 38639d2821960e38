//! Loading info snapshot
//!
//! A `LoadingInfo` is created by the engine once per load status change and
//! handed to every observer. The data lives behind an `Arc`, so clones are
//! cheap and all clones see the same immutable snapshot.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use pageload_net::{EngineErrorDomain, NetError};

use crate::domain::ErrorDomain;
use crate::error::LoadingInfoResult;
use crate::status::LoadStatus;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct LoadingInfoData {
    url: Url,
    status: LoadStatus,
    is_error_page: bool,
    error_string: String,
    error_code: i32,
    error_domain: ErrorDomain,
}

/// Outcome of a single page load status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingInfo {
    data: Arc<LoadingInfoData>,
}

/// Error details of a failed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadFailure<'a> {
    /// Human-readable error description
    pub error_string: &'a str,
    /// Engine error code
    pub error_code: i32,
    /// Error category
    pub error_domain: ErrorDomain,
}

impl LoadingInfo {
    /// Create a new loading info.
    ///
    /// Values are taken as given. The error fields are only meaningful
    /// when `status` is `Failed`; see [`LoadingInfo::failure`].
    pub fn new(
        url: Url,
        status: LoadStatus,
        is_error_page: bool,
        error_string: impl Into<String>,
        error_code: i32,
        error_domain: ErrorDomain,
    ) -> Self {
        Self {
            data: Arc::new(LoadingInfoData {
                url,
                status,
                is_error_page,
                error_string: error_string.into(),
                error_code,
                error_domain,
            }),
        }
    }

    /// Create a loading info from the engine's own domain classification
    pub fn from_engine(
        url: Url,
        status: LoadStatus,
        is_error_page: bool,
        error_string: impl Into<String>,
        error_code: i32,
        error_domain: EngineErrorDomain,
    ) -> Self {
        Self::new(url, status, is_error_page, error_string, error_code, error_domain.into())
    }

    /// Create a loading info from raw engine values
    pub fn from_raw(
        url: &str,
        status: i32,
        is_error_page: bool,
        error_string: impl Into<String>,
        error_code: i32,
        error_domain: i32,
    ) -> LoadingInfoResult<Self> {
        let url = Url::parse(url)?;
        let status = LoadStatus::try_from(status)?;
        let error_domain = ErrorDomain::try_from(error_domain)?;
        Ok(Self::new(url, status, is_error_page, error_string, error_code, error_domain))
    }

    /// Load has started
    pub fn started(url: Url) -> Self {
        Self::without_error(url, LoadStatus::Started)
    }

    /// Load was stopped before completing
    pub fn stopped(url: Url) -> Self {
        Self::without_error(url, LoadStatus::Stopped)
    }

    /// Load completed successfully
    pub fn succeeded(url: Url) -> Self {
        Self::without_error(url, LoadStatus::Succeeded)
    }

    /// Load failed with an engine error
    pub fn failed(url: Url, error: &NetError, is_error_page: bool) -> Self {
        debug!("Load failed: {} ({}, code {})", url, error, error.code());
        Self::from_engine(
            url,
            LoadStatus::Failed,
            is_error_page,
            error.to_string(),
            error.code(),
            error.domain(),
        )
    }

    fn without_error(url: Url, status: LoadStatus) -> Self {
        Self::new(url, status, false, String::new(), 0, ErrorDomain::None)
    }

    /// URL of the load request
    pub fn url(&self) -> &Url {
        &self.data.url
    }

    /// Current phase of the load
    pub fn status(&self) -> LoadStatus {
        self.data.status
    }

    /// Whether the load resulted in an error page
    pub fn is_error_page(&self) -> bool {
        self.data.is_error_page
    }

    /// Error message, empty when there is none
    pub fn error_string(&self) -> &str {
        &self.data.error_string
    }

    /// Engine error code
    pub fn error_code(&self) -> i32 {
        self.data.error_code
    }

    /// Error category
    pub fn error_domain(&self) -> ErrorDomain {
        self.data.error_domain
    }

    /// Error details, present only for failed loads
    pub fn failure(&self) -> Option<LoadFailure<'_>> {
        if self.data.status != LoadStatus::Failed {
            return None;
        }
        Some(LoadFailure {
            error_string: &self.data.error_string,
            error_code: self.data.error_code,
            error_domain: self.data.error_domain,
        })
    }

    /// Whether both handles refer to the same snapshot storage
    pub fn shares_data_with(&self, other: &LoadingInfo) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Serialize for LoadingInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LoadingInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        LoadingInfoData::deserialize(deserializer).map(|data| Self {
            data: Arc::new(data),
        })
    }
}
