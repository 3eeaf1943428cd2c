use std::future::Future;

use reqwest::Url;

/// Error type transports report failures with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The network boundary: a single HTTP GET returning the raw body.
///
/// A non-2xx status must be reported as an error, not as a body.
pub trait HttpClient: Send + Sync + 'static {
    fn get(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, BoxError>> + Send;
}

/// [`HttpClient`] backed by `reqwest`, with its default timeouts and headers.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, BoxError> {
        let response = self.inner.get(url.clone()).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
