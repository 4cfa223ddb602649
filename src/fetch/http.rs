// src/fetch/http.rs

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;

use crate::errors::Result;

use super::Fetcher;

/// Real HTTP fetcher used in production.
///
/// Wraps a shared [`reqwest::Client`] so connections are pooled across
/// resources and rounds. The per-request timeout bounds how long a slow
/// server can hold a worker.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("watchurl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        // Clone the client so the future doesn't borrow `self` across `await`.
        let client = self.client.clone();
        let url = url.to_string();

        Box::pin(async move {
            let response = client.get(&url).send().await?.error_for_status()?;
            let body = response.bytes().await?;
            Ok(body.to_vec())
        })
    }
}
