use std::collections::VecDeque;
use std::process::Stdio;

use tokio::sync::mpsc;

use crate::executor::{Outcome, QueryExecutor};
use crate::page::Page;
use crate::render::render;
use crate::utilities::suggest_command;
use crate::view::{sources_markdown, View};

const HELP: &str = "\
Type a word and press Enter to look it up.
  :define <word>, :find <word>   look up a word that starts with ':'
  :play                          play the pronunciation of the current word
  :sources                       show where the current entry comes from
  :help                          show this help
  :quit, :exit, :q               leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    Play,
    Sources,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with(':') {
            return Command::Lookup(line.to_owned());
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().unwrap_or_default().trim();
        match &command[..] {
            ":define" | ":find" => Command::Lookup(rest.to_owned()),
            ":play" => Command::Play,
            ":sources" => Command::Sources,
            ":help" => Command::Help,
            ":quit" | ":exit" | ":q" => Command::Quit,
            _ => Command::Unknown(command),
        }
    }

    /// Only a real new query replaces the lookup in flight.
    pub fn supersedes_lookup(&self) -> bool {
        matches!(self, Command::Lookup(text) if !text.is_empty())
    }
}

/// Owns the page and is the only thing that writes to it.
pub struct Session<V> {
    executor: QueryExecutor,
    page: Page,
    view: V,
    player: Option<String>,
}

impl<V: View> Session<V> {
    pub fn new(executor: QueryExecutor, view: V, player: Option<String>) -> Self {
        Self {
            executor,
            page: Page::default(),
            view,
            player,
        }
    }

    /// Runs one lookup to completion and shows the result.
    pub async fn lookup(&mut self, raw: &str) -> Outcome {
        let outcome = self.executor.execute(raw, &mut self.page).await;
        self.finish(&outcome);
        outcome
    }

    /// Handles input lines until `:quit` or the channel closes.
    ///
    /// A new query typed while a lookup is still in flight drops that lookup,
    /// so only the newest query ever reaches the page. Other commands wait
    /// until the lookup is shown, except `:quit` which leaves right away.
    pub async fn run(&mut self, mut lines: mpsc::Receiver<String>) {
        let mut queued: VecDeque<String> = VecDeque::new();
        let mut closed = false;
        'session: loop {
            let line = match queued.pop_front() {
                Some(line) => line,
                None if closed => break,
                None => {
                    self.view.prompt(&self.page);
                    match lines.recv().await {
                        Some(line) => line,
                        None => break,
                    }
                }
            };
            self.page.remove_message();

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Help => self.view.notice(HELP),
                Command::Play => self.play(),
                Command::Sources => self.show_sources(),
                Command::Unknown(command) => {
                    let hint = match suggest_command(&command) {
                        Some(suggestion) => format!("Did you mean {suggestion}?"),
                        None => "Type :help for the list of commands.".to_owned(),
                    };
                    self.view.notice(&format!("Unknown command {command}. {hint}"));
                }
                Command::Lookup(text) => {
                    let outcome = {
                        let lookup = self.executor.execute(&text, &mut self.page);
                        tokio::pin!(lookup);
                        loop {
                            tokio::select! {
                                biased;
                                outcome = &mut lookup => break Some(outcome),
                                next = lines.recv(), if !closed => match next {
                                    Some(next) => {
                                        let command = Command::parse(&next);
                                        if command == Command::Quit {
                                            break 'session;
                                        }
                                        let supersedes = command.supersedes_lookup();
                                        queued.push_back(next);
                                        if supersedes {
                                            tracing::info!(query = %text, "newer query arrived, dropping in-flight lookup");
                                            break None;
                                        }
                                    }
                                    None => closed = true,
                                },
                            }
                        }
                    };
                    if let Some(outcome) = outcome {
                        self.finish(&outcome);
                    }
                }
            }
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        if let Outcome::Found(word) = outcome {
            render(word, &mut self.page);
        }
        self.view.present(&self.page);
    }

    fn play(&mut self) {
        let audio = match &self.page.audio_src {
            Some(src) if self.page.play_button && self.page.word_section => src.clone(),
            _ => {
                self.view.notice("No pronunciation audio for the current word.");
                return;
            }
        };
        self.page.audio_muted = false;

        let Some(player) = &self.player else {
            self.view.notice(&format!("Pronunciation audio: {audio}"));
            return;
        };
        let mut parts = player.split_whitespace();
        let Some(program) = parts.next() else {
            return;
        };
        let spawned = tokio::process::Command::new(program)
            .args(parts)
            .arg(&audio)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                tokio::spawn(async move {
                    match child.wait().await {
                        Ok(status) if !status.success() => {
                            tracing::warn!(%status, "audio player exited with an error")
                        }
                        Ok(_) => {}
                        Err(err) => tracing::warn!(error = %err, "failed to wait for audio player"),
                    }
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, %program, "failed to start audio player");
                self.view.notice(&format!("Couldn't start {program}. Pronunciation audio: {audio}"));
            }
        }
    }

    fn show_sources(&mut self) {
        let listing = match self.page.sources() {
            Some(list) if self.page.source_section && !list.links.is_empty() => sources_markdown(list),
            _ => "No sources to show yet.".to_owned(),
        };
        self.view.notice(listing.trim_end());
    }
}
