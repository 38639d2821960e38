//! Load status

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LoadingInfoError;

/// Phase of a page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum LoadStatus {
    /// Page is currently loading
    Started = 0,
    /// Loading was stopped by the user, the loader, or the network stack
    Stopped = 1,
    /// Page has been loaded successfully
    Succeeded = 2,
    /// Page could not be loaded
    Failed = 3,
}

impl LoadStatus {
    /// Whether the load has reached a terminal phase
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Started)
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Started => "started",
            Self::Stopped => "stopped",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl TryFrom<i32> for LoadStatus {
    type Error = LoadingInfoError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Started),
            1 => Ok(Self::Stopped),
            2 => Ok(Self::Succeeded),
            3 => Ok(Self::Failed),
            other => Err(LoadingInfoError::UnknownLoadStatus(other)),
        }
    }
}
