//! HTTP transport abstraction for the client
//!
//! The client only needs "GET this URI, give me the body". Anything that
//! can do that (a reqwest client, a fixture map in tests) implements
//! [`Transport`].

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "native")]
pub use native::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("HTTP {status} for {uri}")]
    Status { status: u16, uri: String },
    #[error("Rate limited")]
    RateLimited,
    #[error("Timeout")]
    Timeout,
}

/// Blocking GET returning the raw response body
pub trait Transport: Send + Sync {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(uri)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(uri)
    }
}
