use std::fmt;

use crate::DictionaryError;

/// Text the user asked to look up, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery(String);

impl LookupQuery {
    pub fn new(raw: &str) -> Result<Self, DictionaryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DictionaryError::EmptyQuery);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
