// https://dictionaryapi.dev/ - free, no key, `<base>/<language>/<word>`
// answers 404 with a json body like {"title": "No Definitions Found", ...}

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::transport::{HttpResponse, Transport};
use crate::{DictionaryError, LookupQuery, NotFoundCause, Word};

pub const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    title: Option<String>,
    message: Option<String>,
}

/// The query goes in as a single path segment, never as a query string.
pub(crate) fn endpoint_url(base: &str, language: &str, query: &LookupQuery) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        language,
        utf8_percent_encode(query.as_str(), NON_ALPHANUMERIC)
    )
}

pub(crate) async fn get_definition(
    transport: &dyn Transport,
    url: &str,
    query: &LookupQuery,
) -> Result<Word, DictionaryError> {
    tracing::debug!(%url, "fetching definition");
    let res = transport
        .get(url)
        .await
        .map_err(|err| not_found(query, NotFoundCause::Transport(err)))?;
    interpret_response(query, res)
}

/// Anything other than a 200 with a non-empty entry list is a miss.
pub(crate) fn interpret_response(
    query: &LookupQuery,
    res: HttpResponse,
) -> Result<Word, DictionaryError> {
    if res.status != 200 {
        let message = serde_json::from_str::<ApiErrorBody>(&res.body)
            .ok()
            .and_then(|body| body.message.or(body.title));
        return Err(not_found(
            query,
            NotFoundCause::Status {
                status: res.status,
                message,
            },
        ));
    }
    let words: Vec<Word> = serde_json::from_str(&res.body)
        .map_err(|err| not_found(query, NotFoundCause::Decode(err)))?;
    words
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::EmptyResponse {
            word: query.to_string(),
        })
}

fn not_found(query: &LookupQuery, cause: NotFoundCause) -> DictionaryError {
    DictionaryError::NotFound {
        word: query.to_string(),
        cause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> LookupQuery {
        LookupQuery::new(raw).unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_owned(),
        }
    }

    #[test]
    fn builds_path_style_url() {
        assert_eq!(
            endpoint_url(DEFAULT_ENDPOINT, "en", &query("keyboard")),
            "https://api.dictionaryapi.dev/api/v2/entries/en/keyboard"
        );
    }

    #[test]
    fn encodes_query_as_one_segment() {
        assert_eq!(
            endpoint_url("http://localhost/entries/", "en", &query("ice cream?/x")),
            "http://localhost/entries/en/ice%20cream%3F%2Fx"
        );
    }

    #[test]
    fn uses_only_the_first_record() {
        let body = r#"[{"word": "first"}, {"word": "second"}]"#;
        let word = interpret_response(&query("first"), response(200, body)).unwrap();
        assert_eq!(word.word, "first");
    }

    #[test]
    fn non_ok_status_is_not_found() {
        let body = r#"{"title": "No Definitions Found", "message": "Sorry pal", "resolution": "..."}"#;
        let err = interpret_response(&query("zzxq"), response(404, body)).unwrap_err();
        match err {
            DictionaryError::NotFound {
                word,
                cause: NotFoundCause::Status { status, message },
            } => {
                assert_eq!(word, "zzxq");
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("Sorry pal"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rate_limit_and_server_errors_look_the_same() {
        for status in [429, 500, 503, 201] {
            let err = interpret_response(&query("word"), response(status, "oops")).unwrap_err();
            assert!(err.is_not_found(), "status {status} gave {err:?}");
        }
    }

    #[test]
    fn garbage_body_is_not_found() {
        let err = interpret_response(&query("word"), response(200, "<html>")).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::NotFound {
                cause: NotFoundCause::Decode(_),
                ..
            }
        ));
    }

    #[test]
    fn empty_array_is_reported_separately() {
        let err = interpret_response(&query("word"), response(200, "[]")).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyResponse { ref word } if word == "word"));
        assert!(err.is_not_found());
    }
}
