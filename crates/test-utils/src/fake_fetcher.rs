use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use watchurl::errors::{Result, WatchurlError};
use watchurl::fetch::Fetcher;

/// One scripted response.
#[derive(Debug, Clone)]
enum Scripted {
    Body(Vec<u8>),
    Failure(String),
}

/// A fake fetcher that:
/// - records which URLs were fetched, in call order
/// - replays a per-URL script of bodies and failures.
///
/// The last entry of a script repeats once the earlier ones are consumed, so
/// a test can run any number of rounds against a stable final response. A URL
/// with no script at all fails every fetch.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    fetched: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body for `url`.
    pub fn push_ok(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Scripted::Body(body.into()));
    }

    /// Queue a failed fetch for `url`.
    pub fn push_err(&self, url: &str, message: &str) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Scripted::Failure(message.to_string()));
    }

    /// URLs fetched so far, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }

    fn next_for(&self, url: &str) -> Option<Scripted> {
        let mut scripts = self.scripts.lock().unwrap();
        let queue = scripts.get_mut(url)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Fetcher for FakeFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        self.fetched.lock().unwrap().push(url.to_string());
        let next = self.next_for(url);
        let url = url.to_string();

        Box::pin(async move {
            match next {
                Some(Scripted::Body(body)) => Ok(body),
                Some(Scripted::Failure(message)) => {
                    Err(WatchurlError::Other(anyhow::anyhow!("{message}")))
                }
                None => Err(WatchurlError::Other(anyhow::anyhow!(
                    "no scripted response for {url}"
                ))),
            }
        })
    }
}
