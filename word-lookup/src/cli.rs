use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "word-lookup",
    about = "Look up words in the Free Dictionary API",
    version
)]
pub struct Cli {
    /// Word to look up. Starts an interactive prompt when omitted.
    pub words: Vec<String>,

    /// Language code used in the lookup path.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Base URL of the entries endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Give up on a lookup after this many seconds (0 disables the timeout).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Command that plays pronunciation audio; receives the audio URL as last argument.
    #[arg(long)]
    pub player: Option<String>,

    /// Print plain markdown instead of styled output.
    #[arg(long)]
    pub plain: bool,

    /// Print the entry as JSON instead of rendering it (one-shot mode only).
    #[arg(long, requires = "words")]
    pub json: bool,
}

impl Cli {
    /// The one-shot query, words joined by a space.
    pub fn query(&self) -> Option<String> {
        (!self.words.is_empty()).then(|| self.words.join(" "))
    }
}
