//! # Cinerate Board
//!
//! Interactive driver for a movie-rating session: mounts a set of
//! pre-rendered cards, wires their rating widgets, and runs the
//! star/poster/search/promote/submit loop from the terminal against a
//! real search endpoint.

mod render;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use cinerate_core::board;
use cinerate_core::search::{self, LookupService};
use cinerate_core::{
    BoardConfig, DomainMessage, GenreQuota, MessageRegion, Reaction, Runtime,
};
use cinerate_model::{CardID, CardParts, Rating};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cinerate-board")]
#[command(about = "Drive a movie-rating session from the terminal")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with the pre-rendered cards to mount.
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Override the configured search endpoint.
    #[arg(long)]
    endpoint: Option<Url>,

    /// Post the final ratings to this URL instead of printing them.
    #[arg(long)]
    submit_to: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,cinerate_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Ok(endpoint) = std::env::var("CINERATE_SEARCH_ENDPOINT") {
        config.search.endpoint = endpoint
            .parse()
            .context("CINERATE_SEARCH_ENDPOINT is not a valid URL")?;
    }
    if let Some(endpoint) = cli.endpoint {
        config.search.endpoint = endpoint;
    }

    let seeds: Vec<CardParts> = match &cli.cards {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => Vec::new(),
    };

    info!(endpoint = %config.search.endpoint, cards = seeds.len(), "starting session");

    let lookup = LookupService::new(
        config.search.endpoint.clone(),
        config.search.timeout(),
    )?;
    let genre_limit = config.genre_limit;
    let mut genres = GenreQuota::new(genre_limit);
    let mut genre_region = MessageRegion::new();
    let mut runtime = Runtime::mount(config, seeds, lookup);

    println!("cinerate-board (type `help` for commands)\n");
    print!("{}", render::board(&runtime.state));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        let message = match command {
            "help" => {
                print_help();
                continue;
            }
            "show" => {
                print!("{}", render::board(&runtime.state));
                continue;
            }
            "quit" | "exit" => break,
            "star" => match parse_star(&runtime.state, &rest) {
                Ok(message) => message,
                Err(reason) => {
                    println!("! {reason}");
                    continue;
                }
            },
            "poster" => match parse_target(&runtime.state, rest.first()) {
                Ok(card) => {
                    DomainMessage::Board(board::Message::PosterClicked {
                        card,
                    })
                }
                Err(reason) => {
                    println!("! {reason}");
                    continue;
                }
            },
            "search" => DomainMessage::Search(
                search::Message::QuerySubmitted(rest.join(" ")),
            ),
            "promote" => {
                DomainMessage::Board(board::Message::PromoteRequested)
            }
            "submit" => {
                DomainMessage::Board(board::Message::SubmitRequested)
            }
            "genre" => {
                let Some(name) = rest.first() else {
                    println!("! usage: genre <NAME>");
                    continue;
                };
                genres.toggle(&name.to_uppercase(), &mut genre_region);
                println!(
                    "genres selected ({}/{}): {}",
                    genres.count(),
                    genre_limit,
                    genres.selected().collect::<Vec<_>>().join(", ")
                );
                if let Some(notice) = genre_region.current() {
                    println!("!! {}", notice.text());
                }
                continue;
            }
            other => {
                println!("! unknown command {other:?}, try `help`");
                continue;
            }
        };

        for reaction in runtime.dispatch(message).await {
            match reaction {
                Reaction::Prompted(text) => println!("! {text}"),
                Reaction::Submitted(fields) => {
                    submit_ratings(cli.submit_to.as_ref(), &fields).await;
                }
            }
        }
        print!("{}", render::board(&runtime.state));
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
commands:
  show                     render the board
  star <n|result> <0-5>    set a card's rating
  poster <n|result>        toggle a card's selection
  search <title>           look up a movie by title
  promote                  add the found movie to your ratings
  genre <name>             toggle a genre selection
  submit                   validate and submit your ratings
  quit                     leave without submitting"
    );
}

/// Resolve `star` arguments into a board message.
fn parse_star(
    state: &cinerate_core::State,
    rest: &[&str],
) -> Result<DomainMessage, String> {
    let [target, value] = rest else {
        return Err("usage: star <n|result> <0-5>".to_string());
    };
    let card = parse_target(state, Some(target))?;
    let value = value
        .parse::<u8>()
        .ok()
        .and_then(|v| Rating::new(v).ok())
        .ok_or_else(|| format!("{value:?} is not a rating between 0 and 5"))?;
    Ok(DomainMessage::Board(board::Message::StarClicked {
        card,
        value,
    }))
}

/// Resolve a card reference: a 1-based roster index, or `result` for the
/// current search result.
fn parse_target(
    state: &cinerate_core::State,
    target: Option<&&str>,
) -> Result<CardID, String> {
    let Some(target) = target else {
        return Err("which card? give an index or `result`".to_string());
    };
    if *target == "result" {
        return state
            .search
            .found_card()
            .map(|card| card.id)
            .ok_or_else(|| "there is no search result yet".to_string());
    }
    let index: usize = target
        .parse()
        .map_err(|_| format!("{target:?} is not a card index"))?;
    state
        .board
        .roster
        .get(index.wrapping_sub(1))
        .map(|card| card.id)
        .ok_or_else(|| format!("no card at index {index}"))
}

/// Post the payload when an endpoint was given, print it otherwise.
async fn submit_ratings(target: Option<&Url>, fields: &[(String, String)]) {
    match target {
        Some(url) => {
            let client = reqwest::Client::new();
            match client.post(url.clone()).form(&fields).send().await {
                Ok(response) if response.status().is_success() => {
                    println!("ratings submitted ({} movies)", fields.len());
                }
                Ok(response) => {
                    warn!(status = %response.status(), "submission rejected");
                    println!("! submission rejected: {}", response.status());
                }
                Err(error) => {
                    warn!(%error, "submission failed");
                    println!("! submission failed: {error}");
                }
            }
        }
        None => {
            println!("ratings payload:");
            for (name, value) in fields {
                println!("  {name}={value}");
            }
        }
    }
}
