use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pantry::cli::{self, App, ExportFormat};
use pantry::config::AppConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(version, about = "Household inventory and recipe ingredient matcher", long_about = None)]
struct Cli {
    /// Language for reports and shared lists (en, it)
    #[arg(long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check which recipe ingredients the inventory covers
    Match {
        /// Inventory JSON document
        #[arg(long)]
        inventory: Option<PathBuf>,
        /// Recipe file, one ingredient per line
        #[arg(short, long)]
        recipe: Option<PathBuf>,
        /// Recipe ingredient line (repeatable)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
        /// Show how each line was classified
        #[arg(long)]
        explain: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the synonyms an ingredient expands to
    Synonyms {
        ingredient: String,
        #[arg(long)]
        json: bool,
    },
    /// Expiry statistics and items about to expire
    Expiry {
        #[arg(long)]
        inventory: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Export the inventory
    Export {
        #[arg(long)]
        inventory: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage the shopping list
    Shopping {
        /// Shopping list JSON file (defaults to shopping-list.json next to the inventory)
        #[arg(long)]
        list: Option<PathBuf>,
        #[command(subcommand)]
        action: ShoppingAction,
    },
}

#[derive(Subcommand)]
enum ShoppingAction {
    /// Append items from a shared list text file
    Import { file: PathBuf },
    /// Add the missing ingredients of a recipe
    FromRecipe {
        #[arg(long)]
        inventory: Option<PathBuf>,
        #[arg(short, long)]
        recipe: Option<PathBuf>,
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Print the list in the share format
    Share,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("PANTRY_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .init();
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(language) = cli.language {
        config.language = language;
    }
    info!(language = %config.language, inventory = %config.inventory_path.display(), "Starting pantry");

    let app = App::new(config)?;

    match cli.command {
        Command::Match {
            inventory,
            recipe,
            ingredients,
            explain,
            json,
        } => {
            let recipe = cli::read_recipe(recipe.as_deref(), &ingredients)?;
            cli::run_match(&app, inventory.as_deref(), &recipe, explain, json)
        }
        Command::Synonyms { ingredient, json } => cli::run_synonyms(&app, &ingredient, json),
        Command::Expiry { inventory, json } => cli::run_expiry(&app, inventory.as_deref(), json),
        Command::Export {
            inventory,
            format,
            output,
        } => cli::run_export(&app, inventory.as_deref(), format, output.as_deref()),
        Command::Shopping { list, action } => {
            let list = list.unwrap_or_else(|| cli::default_list_path(&app.config));
            match action {
                ShoppingAction::Import { file } => cli::run_shopping_import(&app, &list, &file),
                ShoppingAction::FromRecipe {
                    inventory,
                    recipe,
                    ingredients,
                } => {
                    let recipe = cli::read_recipe(recipe.as_deref(), &ingredients)?;
                    cli::run_shopping_from_recipe(&app, &list, inventory.as_deref(), &recipe)
                }
                ShoppingAction::Share => cli::run_shopping_share(&app, &list),
            }
        }
    }
}
