use std::env;
use std::time::Duration;

use dictionary::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE};

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base of the lookup endpoint, language and word are appended as path segments
    pub endpoint: String,
    pub language: String,
    /// `None` leaves the HTTP client's default in place
    pub timeout: Option<Duration>,
    /// Command used to play pronunciation audio, e.g. `mpv --no-video`
    pub player: Option<String>,
    /// Print raw markdown instead of styled terminal output
    pub plain: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = var("WORD_LOOKUP_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let language = var("WORD_LOOKUP_LANGUAGE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let timeout = var("WORD_LOOKUP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let player = var("WORD_LOOKUP_PLAYER").filter(|v| !v.trim().is_empty());

        Config {
            endpoint,
            language,
            timeout,
            player,
            plain: false,
        }
    }

    /// Flags given on the command line win over the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(language) = &cli.language {
            self.language = language.clone();
        }
        if let Some(secs) = cli.timeout_secs {
            self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(player) = cli.player.as_ref().filter(|v| !v.trim().is_empty()) {
            self.player = Some(player.clone());
        }
        self.plain |= cli.plain;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
