use std::process::ExitCode;

use clap::Parser;
use dictionary::transport::HttpTransport;
use dictionary::Dictionary;
use tokio::sync::mpsc;

use cli::Cli;
use config::Config;
use executor::{Outcome, QueryExecutor};
use session::Session;
use utilities::read_line;
use view::TerminalView;

mod cli;
mod config;
mod executor;
mod page;
mod render;
mod session;
mod utilities;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    // logs go to stderr so they never mix with rendered entries
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new().with_cli(&cli);
    tracing::debug!(?config, "starting");

    let dictionary = Dictionary::new(HttpTransport::new(config.timeout)?)
        .with_endpoint(config.endpoint.clone())
        .with_language(config.language.clone());
    let executor = QueryExecutor::new(dictionary);

    match cli.query() {
        Some(query) if cli.json => print_json(&executor, &query).await,
        Some(query) => {
            let mut session = Session::new(executor, TerminalView::new(config.plain), config.player);
            Ok(exit_code(&session.lookup(&query).await))
        }
        None => {
            let mut session = Session::new(executor, TerminalView::new(config.plain), config.player);
            session.run(spawn_line_reader()).await;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn print_json(executor: &QueryExecutor, query: &str) -> anyhow::Result<ExitCode> {
    let mut page = page::Page::default();
    let outcome = executor.execute(query, &mut page).await;
    match &outcome {
        Outcome::Found(word) => println!("{}", serde_json::to_string_pretty(word)?),
        Outcome::NotFound => eprintln!("No definitions found for '{}'.", query.trim()),
        Outcome::Invalid => eprintln!("The search query is empty."),
    }
    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Found(_) => ExitCode::SUCCESS,
        Outcome::NotFound => ExitCode::FAILURE,
        Outcome::Invalid => ExitCode::from(2),
    }
}

/// Reads stdin on its own thread so lookups keep running while the user types.
/// The thread is detached: it may still sit in `read_line` when the session quits.
fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(8);
    std::thread::spawn(move || loop {
        match read_line() {
            Ok(Some(line)) => {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "failed to read from stdin");
                break;
            }
        }
    });
    rx
}
