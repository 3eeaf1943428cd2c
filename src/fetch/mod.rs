//! Trivia fetch pipeline.
//!
//! One GET against the trivia endpoint, decoded into a [`QuizList`] and
//! handed back to the presentation loop as a [`FetchOutcome`].
//!
//! [`QuizList`]: crate::models::QuizList

mod client;
mod error;
mod service;

pub use client::{BoxError, HttpClient, ReqwestClient};
pub use error::FetchError;
pub use service::{
    decode_quiz_list, fetch_quiz_list, parse_endpoint, FetchOutcome, FetchService,
    DEFAULT_ENDPOINT,
};
