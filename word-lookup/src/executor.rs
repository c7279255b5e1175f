use dictionary::{Dictionary, DictionaryError, LookupQuery, Word};

/// Callbacks the executor fires around a lookup so the surface can hide stale
/// content and show the right indicator.
pub trait LookupHooks {
    fn fetching(&mut self);
    fn fetched(&mut self);
    fn not_found(&mut self);
    fn invalid_query(&mut self);
}

#[derive(Debug)]
pub enum Outcome {
    Found(Word),
    NotFound,
    Invalid,
}

pub struct QueryExecutor {
    dictionary: Dictionary,
}

impl QueryExecutor {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub async fn execute<H>(&self, raw: &str, hooks: &mut H) -> Outcome
    where
        H: LookupHooks + ?Sized,
    {
        let query = match LookupQuery::new(raw) {
            Ok(query) => query,
            Err(_) => {
                hooks.invalid_query();
                return Outcome::Invalid;
            }
        };

        hooks.fetching();
        match self.dictionary.lookup(&query).await {
            Ok(word) => {
                tracing::info!(word = %word.word, meanings = word.meanings.len(), "lookup succeeded");
                hooks.fetched();
                Outcome::Found(word)
            }
            Err(err) if err.is_not_found() => {
                match &err {
                    DictionaryError::EmptyResponse { .. } => {
                        tracing::warn!(error = %err, "dictionary returned an empty entry list")
                    }
                    _ => tracing::warn!(error = %err, url = %self.dictionary.endpoint_for(&query), "lookup failed"),
                }
                hooks.not_found();
                Outcome::NotFound
            }
            Err(err) => {
                tracing::warn!(error = %err, "lookup rejected");
                hooks.invalid_query();
                Outcome::Invalid
            }
        }
    }
}
