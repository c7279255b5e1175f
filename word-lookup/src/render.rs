use dictionary::{Word, WordMeaning};

use crate::page::{
    DefinitionItem, MeaningBlock, MeaningSection, Page, SourceLink, SourceList, EXTERNAL_LINK_ICON,
};

/// Draws `word` onto the page, superseding whatever the last lookup left there.
pub fn render(word: &Word, page: &mut Page) {
    render_phonetics(word, page);

    page.meanings.clear();
    render_meanings(&word.meanings, page);

    append_source_list(&word.source_urls, page);
    prune_source_lists(page);
}

/// Overwrites the header fields in place.
fn render_phonetics(word: &Word, page: &mut Page) {
    page.word = word.word.clone();

    let selection = word.select_phonetic();
    page.phonetic = selection.text.unwrap_or_default();

    match selection.audio {
        Some(audio) => {
            page.audio_src = Some(audio);
            page.audio_muted = true;
            page.play_button = true;
        }
        None => {
            page.play_button = false;
            page.audio_src = None;
            page.audio_muted = true;
        }
    }
}

fn render_meanings(meanings: &[WordMeaning], page: &mut Page) {
    for meaning in meanings {
        let definitions = meaning
            .definitions
            .iter()
            .map(|definition| DefinitionItem {
                definition: definition.definition.clone(),
                example: definition.example.as_ref().map(|e| format!("\"{e}\"")),
            })
            .collect();

        let mut sections = vec![MeaningSection::Definitions(definitions)];
        if !meaning.synonyms.is_empty() {
            sections.push(MeaningSection::Synonyms(meaning.synonyms.clone()));
        }
        if !meaning.antonyms.is_empty() {
            sections.push(MeaningSection::Antonyms(meaning.antonyms.clone()));
        }

        page.meanings.push(MeaningBlock {
            part_of_speech: meaning.part_of_speech.clone(),
            sections,
        });
    }
}

/// Source lists are appended, never replaced; see [`prune_source_lists`].
pub fn append_source_list(source_urls: &[String], page: &mut Page) {
    let links = source_urls
        .iter()
        .map(|url| SourceLink {
            href: url.clone(),
            text: url.clone(),
            new_window: true,
            icon: EXTERNAL_LINK_ICON,
        })
        .collect();
    page.source_lists.push(SourceList { links });
}

/// Drops older attribution lists so only the newest one stays.
pub fn prune_source_lists(page: &mut Page) {
    if page.source_lists.len() > 1 {
        let stale = page.source_lists.len() - 1;
        page.source_lists.drain(..stale);
    }
}
