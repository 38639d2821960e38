//! Pageload Core
//!
//! The `LoadingInfo` snapshot handed to observers on every page load
//! status change, plus the public load status and error domain types.

mod domain;
mod error;
mod info;
mod observer;
mod status;

pub use domain::ErrorDomain;
pub use error::{LoadingInfoError, LoadingInfoResult};
pub use info::{LoadFailure, LoadingInfo};
pub use observer::{LoadingObserver, LoadingObservers, ObserverId};
pub use status::LoadStatus;

pub use pageload_net::{EngineErrorDomain, NetError};
