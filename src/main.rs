//! Flipdeck CLI
//!
//! Command-line interface for a flip-card deck kept on disk:
//! - List, add and remove cards
//! - Edit a card's faces with text or images
//! - Render the deck as an HTML page
//! - Drive the deck interactively

use anyhow::Context;
use clap::{Parser, Subcommand};
use flipdeck::config::{generate_default_config, Config, LoggingConfig};
use flipdeck::deck::render_page;
use flipdeck::editor::{EditController, EditorForm, FsImageLoader, SaveReport, UiState};
use flipdeck::shell::{format_deck, Shell};
use flipdeck::store::{CardStore, FileStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flipdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flip-card decks with text and image faces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/flipdeck/config.toml or ./flipdeck.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the deck, overrides the config
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List cards
    List,

    /// Append placeholder cards
    Add {
        /// How many cards to add
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Remove the last card
    Remove,

    /// Edit a card's faces
    Edit {
        /// Card index (0-based)
        index: usize,
        /// Front text
        #[arg(long)]
        front: Option<String>,
        /// Back text
        #[arg(long)]
        back: Option<String>,
        /// Front image file, takes precedence over --front
        #[arg(long)]
        front_image: Option<PathBuf>,
        /// Back image file, takes precedence over --back
        #[arg(long)]
        back_image: Option<PathBuf>,
    },

    /// Render the deck as a standalone HTML page
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive session
    Shell,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("flipdeck={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn open_deck(config: &Config) -> anyhow::Result<EditController<FileStore>> {
    let storage_path = config.storage.storage_path();
    tracing::debug!("Deck storage: {:?}", storage_path);

    let store = CardStore::new(FileStore::new(&storage_path));
    let controller = EditController::open(store, config.deck.locale)
        .with_context(|| format!("Failed to load deck from {:?}", storage_path))?;
    Ok(controller)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Config { output } => write_default_config(output.as_deref())?,

        Commands::List => {
            let controller = open_deck(&config)?;
            println!("{}", format_deck(controller.deck(), UiState::View));
        }

        Commands::Add { count } => {
            let mut controller = open_deck(&config)?;
            for _ in 0..count {
                let index = controller.add_card(None)?;
                println!("Added card {}", index);
            }
        }

        Commands::Remove => {
            let mut controller = open_deck(&config)?;
            match controller.remove_last()? {
                Some(_) => println!("Removed card {}", controller.deck().len()),
                None => println!("No cards to remove"),
            }
        }

        Commands::Edit {
            index,
            front,
            back,
            front_image,
            back_image,
        } => {
            let mut controller = open_deck(&config)?;
            let mut form = EditorForm::new()
                .front_text(front.unwrap_or_default())
                .back_text(back.unwrap_or_default());
            form.front.image = front_image;
            form.back.image = back_image;

            controller.toggle_edit_mode();
            controller.select_card(index)?;

            let report = controller.save_card_content(form, &FsImageLoader).await?;
            for (face, err) in report.failures() {
                eprintln!("Could not set {} image: {}", face, err);
            }
            if let SaveReport::Saved { index, .. } = &report {
                println!("Saved card {}", index);
            }

            if !report.failures().is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Render { output } => {
            let controller = open_deck(&config)?;
            let page = render_page(controller.deck(), UiState::View, controller.locale());
            match output {
                Some(path) => {
                    std::fs::write(&path, page)?;
                    println!("Rendered {} cards to {:?}", controller.deck().len(), path);
                }
                None => print!("{}", page),
            }
        }

        Commands::Shell => {
            let mut shell = Shell::new(open_deck(&config)?);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell.run(stdin, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
