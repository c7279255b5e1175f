//! In-memory presentation surface. The renderer and the executor hooks write
//! to it, the terminal view reads it.

use crate::executor::LookupHooks;

pub const EXTERNAL_LINK_ICON: &str = "↗";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionItem {
    pub definition: String,
    /// Already wrapped in quotes
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeaningSection {
    Definitions(Vec<DefinitionItem>),
    Synonyms(Vec<String>),
    Antonyms(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningBlock {
    pub part_of_speech: String,
    pub sections: Vec<MeaningSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub href: String,
    pub text: String,
    pub new_window: bool,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    pub links: Vec<SourceLink>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub error_message: bool,
    pub input_outlined: bool,
    pub not_found: bool,

    pub word_section: bool,
    pub meaning_section: bool,
    pub source_section: bool,

    pub word: String,
    pub phonetic: String,
    pub audio_src: Option<String>,
    pub audio_muted: bool,
    pub play_button: bool,

    pub meanings: Vec<MeaningBlock>,
    pub source_lists: Vec<SourceList>,
}

impl Page {
    /// Hides the validation message once the user starts typing again.
    pub fn remove_message(&mut self) {
        if self.error_message {
            self.error_message = false;
            self.input_outlined = false;
        }
    }

    /// The attribution list currently on display.
    pub fn sources(&self) -> Option<&SourceList> {
        self.source_lists.last()
    }

    fn hide_sections(&mut self) {
        self.word_section = false;
        self.meaning_section = false;
        self.source_section = false;
    }
}

impl LookupHooks for Page {
    fn fetching(&mut self) {
        self.not_found = false;
        self.hide_sections();
    }

    fn fetched(&mut self) {
        self.remove_message();
        self.not_found = false;
        self.word_section = true;
        self.meaning_section = true;
        self.source_section = true;
    }

    fn not_found(&mut self) {
        self.not_found = true;
    }

    fn invalid_query(&mut self) {
        self.error_message = true;
        self.input_outlined = true;
    }
}
