use serde::{Deserialize, Deserializer, Serialize};

/// One entry record returned by the dictionary API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, deserialize_with = "non_empty")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    /// `""` stays a present, empty text and does not fall back to `Word::phonetic`
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// The pronunciation picked for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneticSelection {
    pub text: Option<String>,
    pub audio: Option<String>,
}

impl Word {
    /// Picks the phonetic text and audio to show for this word.
    ///
    /// The variants are folded last-write-wins: whatever variant comes last
    /// replaces the earlier ones, even when it carries neither text nor audio.
    /// The top-level `phonetic` only fills in a missing text.
    pub fn select_phonetic(&self) -> PhoneticSelection {
        let selected = self.phonetics.last().cloned().unwrap_or_default();
        PhoneticSelection {
            text: selected.text.or_else(|| self.phonetic.clone()),
            audio: selected.audio,
        }
    }
}

// upstream sends `""` for missing audio
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_with(phonetic: Option<&str>, phonetics: Vec<Phonetic>) -> Word {
        Word {
            word: "test".to_owned(),
            phonetic: phonetic.map(str::to_owned),
            phonetics,
            origin: None,
            meanings: Vec::new(),
            source_urls: Vec::new(),
            license: None,
        }
    }

    fn variant(text: Option<&str>, audio: Option<&str>) -> Phonetic {
        Phonetic {
            text: text.map(str::to_owned),
            audio: audio.map(str::to_owned),
        }
    }

    #[test]
    fn last_variant_wins() {
        let word = word_with(
            None,
            vec![variant(Some("a"), None), variant(Some("b"), Some("b.mp3"))],
        );
        let selection = word.select_phonetic();
        assert_eq!(selection.text.as_deref(), Some("b"));
        assert_eq!(selection.audio.as_deref(), Some("b.mp3"));
    }

    #[test]
    fn empty_trailing_variant_overrides_good_one() {
        let word = word_with(
            Some("/fallback/"),
            vec![variant(Some("/good/"), Some("good.mp3")), variant(None, None)],
        );
        let selection = word.select_phonetic();
        assert_eq!(selection.text.as_deref(), Some("/fallback/"));
        assert_eq!(selection.audio, None);
    }

    #[test]
    fn no_variants_uses_fallback_text() {
        let word = word_with(Some("fallback"), Vec::new());
        let selection = word.select_phonetic();
        assert_eq!(selection.text.as_deref(), Some("fallback"));
        assert_eq!(selection.audio, None);
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(word_with(None, Vec::new()).select_phonetic(), PhoneticSelection::default());
    }

    #[test]
    fn empty_text_does_not_fall_back() {
        let body = r#"{
            "word": "quiet",
            "phonetic": "/ˈkwaɪ.ət/",
            "phonetics": [{"text": "", "audio": ""}]
        }"#;
        let word: Word = serde_json::from_str(body).unwrap();
        let selection = word.select_phonetic();
        assert_eq!(selection.text.as_deref(), Some(""));
        assert_eq!(selection.audio, None);
    }

    #[test]
    fn deserializes_upstream_record() {
        let body = r#"{
            "word": "hello",
            "phonetics": [
                {"audio": "https://example.com/hello-au.mp3"},
                {"text": "/həˈləʊ/", "audio": ""}
            ],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": []}
                ],
                "synonyms": ["greeting"],
                "antonyms": []
            }],
            "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
            "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
        }"#;
        let word: Word = serde_json::from_str(body).unwrap();
        assert_eq!(word.phonetic, None);
        assert_eq!(word.phonetics[1].audio, None);
        assert_eq!(word.meanings[0].part_of_speech, "noun");
        assert_eq!(word.meanings[0].definitions[0].example, None);
        assert_eq!(word.source_urls, vec!["https://en.wiktionary.org/wiki/hello"]);
        assert_eq!(word.meanings[0].synonyms, vec!["greeting"]);
        assert_eq!(word.license.as_ref().map(|l| &l.name[..]), Some("CC BY-SA 3.0"));

        let selection = word.select_phonetic();
        assert_eq!(selection.text.as_deref(), Some("/həˈləʊ/"));
        assert_eq!(selection.audio, None);
    }
}
