//! `wordthing`: look up a word in the terminal.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};
use indicatif::{ProgressBar, ProgressStyle};
use lexicon_client::{DatamuseClient, DictionaryClient};
use tracing_subscriber::EnvFilter;

use wordthing_search::terminal::{self, MenuAction};
use wordthing_search::{ProxyClient, Screen, SearchError, Session};

#[derive(Parser)]
#[command(name = "wordthing")]
#[command(about = "Look up definitions, synonyms, and AI notes for a word")]
#[command(version)]
struct Cli {
    /// Base URL of the augmentation proxy
    #[arg(long, global = true, env = "WORDTHING_API_URL", default_value = "http://localhost:3003")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once and print every panel as it resolves
    Search {
        /// Word or short phrase
        #[arg(required = true)]
        word: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new(
        Arc::new(DictionaryClient::default()),
        Arc::new(DatamuseClient::default()),
        Arc::new(ProxyClient::new(&cli.api_url)),
    );

    match cli.command {
        Some(Commands::Search { word }) => search_once(&mut session, &word.join(" ")).await,
        None => interactive(&mut session).await,
    }
}

async fn search_once(session: &mut Session, word: &str) -> Result<()> {
    session.search(word).await?;

    let Screen::Results(view) = session.screen() else {
        return Ok(());
    };
    println!("{}", terminal::draw_primary(&view.primary));
    println!("{}", terminal::draw_synonyms(&view.synonyms));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    while session.pending_panels() > 0 {
        spinner.set_message(format!("Waiting for {} AI panel(s)", session.pending_panels()));
        let Some(kind) = session.next_update().await else {
            break;
        };
        if let Screen::Results(view) = session.screen() {
            spinner.println(terminal::draw_panel(view.panel(kind)));
        }
    }
    spinner.finish_and_clear();
    Ok(())
}

async fn interactive(session: &mut Session) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        session.drain_updates();
        println!();
        print!("{}", terminal::draw(session.screen()));
        println!();

        let actions = terminal::menu_actions(session.screen(), session.pending_panels());
        let labels: Vec<String> = actions
            .iter()
            .map(|action| action.label(session.screen()))
            .collect();

        let choice = tokio::task::block_in_place(|| {
            FuzzySelect::with_theme(&theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()
        })?;

        match &actions[choice] {
            MenuAction::Search => {
                let word: String = tokio::task::block_in_place(|| {
                    Input::with_theme(&theme)
                        .with_prompt("Word")
                        .allow_empty(true)
                        .interact_text()
                })?;
                report(session.search(&word).await);
            }
            MenuAction::Synonym(i) => report(session.follow_synonym(*i).await),
            MenuAction::PartOfSpeech(i) => {
                session.select_part_of_speech(*i);
            }
            MenuAction::Refresh => {
                // Block briefly so at least one pending panel has a chance to land.
                let _ = tokio::time::timeout(Duration::from_secs(2), session.next_update()).await;
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// Not-found and unavailable outcomes are already on screen. Input errors are not.
fn report(outcome: std::result::Result<(), SearchError>) {
    if let Err(SearchError::Input(e)) = outcome {
        println!("{}", console::style(e).yellow());
    }
}
