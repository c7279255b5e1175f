use std::fmt;

use dictionary_api::{endpoint_url, get_definition};
use transport::Transport;

mod dictionary;
mod dictionary_api;
mod query;
pub mod transport;

pub use dictionary::{License, Phonetic, PhoneticSelection, Word, WordDefinition, WordMeaning};
pub use dictionary_api::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE};
pub use query::LookupQuery;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("the search query is empty")]
    EmptyQuery,
    #[error("no definitions found for '{word}' ({cause})")]
    NotFound { word: String, cause: NotFoundCause },
    #[error("the dictionary answered with no entries for '{word}'")]
    EmptyResponse { word: String },
}

impl DictionaryError {
    /// True for every failure the user should see as "no results".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DictionaryError::NotFound { .. } | DictionaryError::EmptyResponse { .. }
        )
    }
}

/// Why a lookup came back empty. Only ever logged.
#[derive(Debug)]
pub enum NotFoundCause {
    Status { status: u16, message: Option<String> },
    Transport(anyhow::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for NotFoundCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundCause::Status {
                status,
                message: Some(message),
            } => write!(f, "status {status}: {message}"),
            NotFoundCause::Status {
                status,
                message: None,
            } => write!(f, "status {status}"),
            NotFoundCause::Transport(err) => write!(f, "transport error: {err:#}"),
            NotFoundCause::Decode(err) => write!(f, "malformed body: {err}"),
        }
    }
}

pub struct Dictionary {
    transport: Box<dyn Transport>,
    endpoint: String,
    language: String,
}

impl Dictionary {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn endpoint_for(&self, query: &LookupQuery) -> String {
        endpoint_url(&self.endpoint, &self.language, query)
    }

    /// Sends exactly one request and returns the first entry of the answer.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<Word, DictionaryError> {
        let url = self.endpoint_for(query);
        get_definition(self.transport.as_ref(), &url, query).await
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        self.lookup(&LookupQuery::new(word)?).await
    }
}
