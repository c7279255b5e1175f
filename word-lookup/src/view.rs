use atty::Stream;
use termimad::{terminal_size, FmtText, MadSkin};

use crate::page::{MeaningSection, Page, SourceList};

const EMPTY_QUERY_MESSAGE: &str = "Whoops, can't be empty…";
const NOT_FOUND_TITLE: &str = "No Definitions Found";
const NOT_FOUND_HINT: &str = "Sorry, we couldn't find definitions for the word you were looking for. \
    You can try the search again later or head to the web instead.";

/// Where the session shows its page and short notices.
pub trait View {
    fn present(&mut self, page: &Page);
    fn notice(&mut self, text: &str);
    fn prompt(&mut self, _page: &Page) {}
}

pub struct TerminalView {
    styled: bool,
}

impl TerminalView {
    pub fn new(plain: bool) -> Self {
        Self {
            styled: !plain && atty::is(Stream::Stdout),
        }
    }

    fn print_markdown(&self, markdown: &str) {
        let trimmed = markdown.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.styled {
            let skin = MadSkin::default();
            let (width, _) = terminal_size();
            let formatted = FmtText::from(&skin, trimmed, Some(width.max(60) as usize));
            println!("{formatted}");
        } else {
            println!("{trimmed}");
        }
    }
}

impl View for TerminalView {
    fn present(&mut self, page: &Page) {
        self.print_markdown(&page_markdown(page));
    }

    fn notice(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, page: &Page) {
        let marker = if page.input_outlined { "!> " } else { ">> " };
        if let Err(err) = crate::utilities::prompt(marker) {
            tracing::debug!(error = %err, "failed to write prompt");
        }
    }
}

/// Markdown for every visible part of the page.
pub fn page_markdown(page: &Page) -> String {
    let mut out = String::new();

    if page.error_message {
        out.push_str(&format!("*{EMPTY_QUERY_MESSAGE}*\n\n"));
    }
    if page.not_found {
        out.push_str(&format!("**{NOT_FOUND_TITLE}**\n\n{NOT_FOUND_HINT}\n\n"));
    }

    if page.word_section {
        out.push_str(&format!("# {}\n", page.word));
        if !page.phonetic.is_empty() {
            out.push_str(&format!("*{}*\n", page.phonetic));
        }
        if page.play_button {
            if page.audio_muted {
                out.push_str("▶ pronunciation available, type `:play`\n");
            } else {
                out.push_str("▶ `:play` to hear it again\n");
            }
        }
        out.push('\n');
    }

    if page.meaning_section {
        for meaning in &page.meanings {
            out.push_str(&format!("## {}\n", meaning.part_of_speech));
            for section in &meaning.sections {
                match section {
                    MeaningSection::Definitions(items) => {
                        out.push_str("### Meaning\n");
                        for item in items {
                            out.push_str(&format!("* {}\n", item.definition));
                            if let Some(example) = &item.example {
                                out.push_str(&format!("  {example}\n"));
                            }
                        }
                    }
                    MeaningSection::Synonyms(words) => {
                        out.push_str(&format!("### Synonyms\n{}\n", words.join(", ")));
                    }
                    MeaningSection::Antonyms(words) => {
                        out.push_str(&format!("### Antonyms\n{}\n", words.join(", ")));
                    }
                }
            }
            out.push('\n');
        }
    }

    if page.source_section {
        if let Some(list) = page.sources() {
            out.push_str(&sources_markdown(list));
        }
    }

    out
}

pub fn sources_markdown(list: &SourceList) -> String {
    if list.links.is_empty() {
        return String::new();
    }
    let mut out = String::from("---\nSource\n");
    for link in &list.links {
        out.push_str("* ");
        out.push_str(&link.text);
        if link.text != link.href {
            out.push_str(&format!(" <{}>", link.href));
        }
        if link.new_window {
            out.push(' ');
            out.push_str(link.icon);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::executor::LookupHooks;
    use crate::page::{DefinitionItem, MeaningBlock, SourceLink, SourceList};

    use super::*;

    fn rendered_page() -> Page {
        let mut page = Page {
            word: "hello".to_owned(),
            phonetic: "/həˈləʊ/".to_owned(),
            audio_src: Some("hello.mp3".to_owned()),
            play_button: true,
            meanings: vec![MeaningBlock {
                part_of_speech: "noun".to_owned(),
                sections: vec![
                    MeaningSection::Definitions(vec![DefinitionItem {
                        definition: "A greeting.".to_owned(),
                        example: Some("\"Hello, everyone.\"".to_owned()),
                    }]),
                    MeaningSection::Antonyms(vec!["goodbye".to_owned()]),
                ],
            }],
            source_lists: vec![SourceList {
                links: vec![SourceLink {
                    href: "https://en.wiktionary.org/wiki/hello".to_owned(),
                    text: "https://en.wiktionary.org/wiki/hello".to_owned(),
                    new_window: true,
                    icon: crate::page::EXTERNAL_LINK_ICON,
                }],
            }],
            ..Page::default()
        };
        page.fetched();
        page
    }

    #[test]
    fn shows_everything_after_a_hit() {
        let text = page_markdown(&rendered_page());
        assert!(text.contains("# hello"));
        assert!(text.contains("/həˈləʊ/"));
        assert!(text.contains(":play"));
        assert!(text.contains("* A greeting."));
        assert!(text.contains("\"Hello, everyone.\""));
        assert!(text.contains("### Antonyms\ngoodbye"));
        assert!(!text.contains("### Synonyms"));
        assert!(text.contains("https://en.wiktionary.org/wiki/hello ↗"));
        assert!(!text.contains(NOT_FOUND_TITLE));
    }

    #[test]
    fn miss_hides_stale_entry() {
        let mut page = rendered_page();
        page.fetching();
        page.not_found();

        let text = page_markdown(&page);
        assert!(text.contains(NOT_FOUND_TITLE));
        assert!(!text.contains("hello"));
        assert!(!text.contains("A greeting."));
    }

    #[test]
    fn blank_query_shows_message() {
        let mut page = Page::default();
        page.invalid_query();
        assert!(page_markdown(&page).contains(EMPTY_QUERY_MESSAGE));
    }
}
