use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::Url;
use tokio::sync::mpsc;

use crate::models::QuizList;

use super::client::HttpClient;
use super::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://the-trivia-api.com/v2/questions/";

/// Result of one `fetch_trivia` call, tagged with the generation it was issued as.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<QuizList, FetchError>,
}

/// Issues trivia fetches in the background and reports them over a channel.
///
/// The service never touches published state. Whoever drains the receiver
/// returned by [`FetchService::new`] decides what to do with each outcome.
pub struct FetchService<C> {
    client: Arc<C>,
    endpoint: String,
    last_generation: AtomicU64,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
}

impl<C: HttpClient> FetchService<C> {
    pub fn new(
        client: C,
        endpoint: impl Into<String>,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            client: Arc::new(client),
            endpoint: endpoint.into(),
            last_generation: AtomicU64::new(0),
            outcomes: tx,
        };
        (service, rx)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Start one fetch and return its generation.
    ///
    /// Overlapping calls are independent requests; nothing is cancelled or
    /// de-duplicated here. Must be called from within a tokio runtime.
    pub fn fetch_trivia(&self) -> Result<u64, FetchError> {
        let url = parse_endpoint(&self.endpoint)?;
        let generation = self.last_generation.fetch_add(1, Ordering::Relaxed) + 1;
        log::info!("fetching trivia from {} (generation {})", url, generation);

        let client = Arc::clone(&self.client);
        let outcomes = self.outcomes.clone();
        tokio::spawn(async move {
            let result = fetch_quiz_list(client.as_ref(), &url).await;
            match &result {
                Ok(list) => log::debug!("generation {} decoded {} items", generation, list.len()),
                Err(e) => log::warn!("generation {} failed: {}", generation, e),
            }
            // A closed receiver means the app is shutting down.
            let _ = outcomes.send(FetchOutcome { generation, result });
        });

        Ok(generation)
    }
}

/// GET `url` and decode the body as a list of trivia items.
pub async fn fetch_quiz_list<C: HttpClient>(client: &C, url: &Url) -> Result<QuizList, FetchError> {
    let body = client.get(url).await.map_err(FetchError::Transport)?;
    decode_quiz_list(&body)
}

/// Decode a response body. A body of only whitespace counts as empty.
pub fn decode_quiz_list(body: &[u8]) -> Result<QuizList, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyResponse);
    }

    Ok(serde_json::from_slice(body)?)
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    let configuration = |reason: String| FetchError::Configuration {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| configuration(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(configuration(format!("unsupported scheme {:?}", other))),
    }
}
