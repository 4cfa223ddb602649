// src/fetch/mod.rs

//! Pluggable resource fetching abstraction.
//!
//! Poll workers talk to a [`Fetcher`] instead of a concrete HTTP client. This
//! makes it easy to script responses in tests while keeping the production
//! implementation in [`http`].
//!
//! - [`http::HttpFetcher`] is the default implementation used by `watchurl`.
//! - Tests can provide their own `Fetcher` that, for example, returns a fixed
//!   sequence of bodies or fails on demand.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

pub mod http;

pub use http::HttpFetcher;

/// Trait abstracting how a resource body is retrieved.
pub trait Fetcher: Send + Sync + Debug {
    /// Fetch the full body of `url`.
    ///
    /// A non-2xx response counts as a failure, so callers only ever see a
    /// body that the server actually served successfully.
    fn fetch<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}
