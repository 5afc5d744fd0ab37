//! Fetching JSON reference data from external endpoints.
//!
//! [`FetchClient`] wraps an [`HttpTransport`] with a bounded retry loop and
//! resolves symbolic resource keys through a [`ResourceMap`].

mod client;
mod resources;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use client::{DEFAULT_MAX_ATTEMPTS, DEFAULT_STATUS_BACKOFF, FetchClient, RetryPolicy};
pub use resources::{KNOWN_RESOURCE_KEYS, ResourceMap};
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
