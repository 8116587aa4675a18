//! Command handlers for the `pantry` binary.
//!
//! Each handler loads what it needs, runs one library operation and writes the
//! result to stdout. Argument parsing lives in `main.rs`.

use crate::config::AppConfig;
use crate::expiry::{
    expired_items, expiring_within, expiry_stats, ExpiryStats, ExpiryStatus, WEEK_DAYS,
};
use crate::export::{export_to_csv, export_to_json, generate_summary};
use crate::ingredient_matcher::{Classification, IngredientMatcher};
use crate::inventory::Inventory;
use crate::localization::LocalizationManager;
use crate::shopping_list::ShoppingList;
use crate::synonyms::{CommonIngredients, SynonymRegistry};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output format of the `export` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Summary,
}

/// Shared state for command handlers
pub struct App {
    pub config: AppConfig,
    pub localization: LocalizationManager,
    pub matcher: IngredientMatcher,
}

impl App {
    /// Build the matcher and message catalogue from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut registry = SynonymRegistry::with_builtins();
        if let Some(path) = &config.synonyms_file {
            let count = registry
                .load_file(path)
                .with_context(|| format!("Failed to load synonyms from {}", path.display()))?;
            info!(count, path = %path.display(), "Loaded extra synonyms");
        }

        let matcher = IngredientMatcher::new(
            registry,
            CommonIngredients::with_builtins(),
            config.matcher.clone(),
        );
        let localization = LocalizationManager::new()
            .context("Failed to load message catalogues")?
            .with_language(&config.language);

        Ok(Self {
            config,
            localization,
            matcher,
        })
    }

    /// Load the inventory, from `path` or the configured default
    pub fn load_inventory(&self, path: Option<&Path>) -> Result<Inventory> {
        let path = path.unwrap_or(self.config.inventory_path.as_path());
        let inventory = Inventory::load(path)
            .with_context(|| format!("Failed to load inventory from {}", path.display()))?;
        debug!(items = inventory.len(), path = %path.display(), "Inventory loaded");
        Ok(inventory)
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Collect recipe lines from a file (one per line, blanks skipped) and from
/// repeated command line values
pub fn read_recipe(recipe_file: Option<&Path>, ingredients: &[String]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if let Some(path) = recipe_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe from {}", path.display()))?;
        lines.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    lines.extend(ingredients.iter().cloned());

    if lines.is_empty() {
        bail!("No recipe ingredients given; use --recipe or --ingredient");
    }
    Ok(lines)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainedLine<'a> {
    ingredient: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

/// `match`: check a recipe against the inventory
pub fn run_match(
    app: &App,
    inventory_path: Option<&Path>,
    recipe: &[String],
    explain: bool,
    json: bool,
) -> Result<()> {
    let inventory = app.load_inventory(inventory_path)?;
    let products = inventory.product_names();
    let result = app.matcher.match_ingredients(&products, recipe);
    info!(
        available = result.available_ingredients.len(),
        missing = result.missing_ingredients.len(),
        percentage = result.match_percentage,
        "Recipe matched"
    );

    if json {
        if explain {
            let lines: Vec<ExplainedLine> = recipe
                .iter()
                .map(|line| ExplainedLine {
                    ingredient: line,
                    classification: app.matcher.classify(&products, line),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        return Ok(());
    }

    let l10n = &app.localization;
    println!(
        "{}",
        l10n.get_message_with_args(
            "match-summary",
            &[
                ("available", &result.available_ingredients.len().to_string()),
                ("total", &recipe.len().to_string()),
                ("percentage", &result.rounded_percentage().to_string()),
            ],
        )
    );

    if explain {
        for line in recipe {
            let classification = app.matcher.classify(&products, line);
            println!("  {} -> {}", line, describe(&classification, l10n));
        }
        return Ok(());
    }

    println!("\n{}:", l10n.get_message("match-available", None));
    for line in &result.available_ingredients {
        println!("  ✅ {}", line);
    }
    println!("\n{}:", l10n.get_message("match-missing", None));
    for line in &result.missing_ingredients {
        println!("  ❌ {}", line);
    }
    Ok(())
}

fn describe(classification: &Classification, l10n: &LocalizationManager) -> String {
    match classification {
        Classification::Common => l10n.get_message("match-explain-common", None),
        Classification::Exact { product } => {
            l10n.get_message_with_args("match-explain-exact", &[("product", product)])
        }
        Classification::Synonym { product, synonym } => l10n.get_message_with_args(
            "match-explain-synonym",
            &[("product", product), ("synonym", synonym)],
        ),
        Classification::Partial {
            product,
            confidence,
        } => l10n.get_message_with_args(
            "match-explain-partial",
            &[
                ("product", product),
                ("confidence", &format!("{:.2}", confidence)),
            ],
        ),
        Classification::Missing { best_confidence } => l10n.get_message_with_args(
            "match-explain-missing",
            &[("confidence", &format!("{:.2}", best_confidence))],
        ),
    }
}

/// `synonyms`: print the synonym expansion of an ingredient
pub fn run_synonyms(app: &App, ingredient: &str, json: bool) -> Result<()> {
    let synonyms = app.matcher.registry().synonyms_for(ingredient);
    if json {
        println!("{}", serde_json::to_string_pretty(&synonyms)?);
    } else {
        for synonym in synonyms {
            println!("{}", synonym);
        }
    }
    Ok(())
}

/// `expiry`: expiry statistics plus the items that need attention
pub fn run_expiry(app: &App, inventory_path: Option<&Path>, json: bool) -> Result<()> {
    let inventory = app.load_inventory(inventory_path)?;
    let today = today();
    let stats = expiry_stats(inventory.items(), today);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let l10n = &app.localization;
    println!("{}", format_expiry_stats(&stats, l10n));
    for item in expired_items(inventory.items(), today)
        .into_iter()
        .chain(expiring_within(inventory.items(), today, WEEK_DAYS))
    {
        let status = ExpiryStatus::of_item(item, today);
        println!("{} {} - {}", status.icon(), item.name, status.label(l10n));
    }
    Ok(())
}

fn format_expiry_stats(stats: &ExpiryStats, l10n: &LocalizationManager) -> String {
    l10n.get_message_with_args(
        "expiry-stats",
        &[
            ("expired", &stats.expired.to_string()),
            ("soon", &stats.expiring_soon.to_string()),
            ("week", &stats.expiring_this_week.to_string()),
            ("total", &stats.total_with_expiry.to_string()),
        ],
    )
}

/// `export`: write the inventory as JSON, CSV or a summary
pub fn run_export(
    app: &App,
    inventory_path: Option<&Path>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let inventory = app.load_inventory(inventory_path)?;
    let rendered = match format {
        ExportFormat::Json => export_to_json(&inventory, Utc::now())?,
        ExportFormat::Csv => export_to_csv(&inventory, &app.localization),
        ExportFormat::Summary => generate_summary(&inventory, today(), &app.localization),
    };
    write_output(&rendered, output)
}

/// `shopping import`: append a shared list to the list file
pub fn run_shopping_import(app: &App, list_path: &Path, import_file: &Path) -> Result<()> {
    let text = fs::read_to_string(import_file)
        .with_context(|| format!("Failed to read {}", import_file.display()))?;
    let mut list = load_list(list_path)?;
    let count = list.import_text(&text);
    if count == 0 {
        bail!("No shopping items found in {}", import_file.display());
    }
    save_list(&list, list_path)?;
    println!(
        "{}",
        app.localization
            .get_message_with_args("shopping-imported", &[("count", &count.to_string())])
    );
    Ok(())
}

/// `shopping from-recipe`: put a recipe's missing ingredients on the list
pub fn run_shopping_from_recipe(
    app: &App,
    list_path: &Path,
    inventory_path: Option<&Path>,
    recipe: &[String],
) -> Result<()> {
    let inventory = app.load_inventory(inventory_path)?;
    let result = app
        .matcher
        .match_ingredients(&inventory.product_names(), recipe);

    let mut list = load_list(list_path)?;
    let added = list.add_missing_ingredients(&result);
    save_list(&list, list_path)?;
    println!(
        "{}",
        app.localization
            .get_message_with_args("shopping-added", &[("count", &added.to_string())])
    );
    Ok(())
}

/// `shopping share`: print the list in the share format
pub fn run_shopping_share(app: &App, list_path: &Path) -> Result<()> {
    let list = load_list(list_path)?;
    if list.is_empty() {
        println!("{}", app.localization.get_message("shopping-empty", None));
    } else {
        println!("{}", list.share_text(&app.localization));
    }
    Ok(())
}

fn load_list(path: &Path) -> Result<ShoppingList> {
    ShoppingList::load(path)
        .with_context(|| format!("Failed to load shopping list from {}", path.display()))
}

fn save_list(list: &ShoppingList, path: &Path) -> Result<()> {
    list.save(path)
        .with_context(|| format!("Failed to save shopping list to {}", path.display()))
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Export written");
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Default shopping list file, next to the inventory
pub fn default_list_path(config: &AppConfig) -> PathBuf {
    config
        .inventory_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("shopping-list.json")
}
