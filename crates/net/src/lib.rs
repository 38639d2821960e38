//! Pageload Network Layer
//!
//! Engine-side error reporting: net error codes, the engine's error
//! domain classification, and the error type loads fail with.

pub mod codes;
mod domain;
mod error;

pub use domain::EngineErrorDomain;
pub use error::{NetError, NetResult};
