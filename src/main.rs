use anyhow::{Context, Result};
use recipe_scanner::config::{AppConfig, LogConfig};
use recipe_scanner::recipe_parser::{parse_recipe_text, RandomIdGenerator};
use recipe_scanner::store::{LocalStore, SavedRecipe};
use recipe_scanner::text_cleanup::{normalize_extracted_text, split_recipe_sections};
use recipe_scanner::validation::validate_recipe_title;
use std::env;
use std::io::Read;
use tracing::info;
use tracing_subscriber::prelude::*;

/// Initialize structured logging with tracing
fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("recipe_scanner={}", config.level).parse()?);

    if config.format == "pretty" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: recipe-scanner [--json] [--add-to-list] [--save TITLE] [FILE]");
    eprintln!();
    eprintln!("Parses recipe text from FILE (or stdin) into ingredient records.");
    eprintln!();
    eprintln!("  --json          print records as JSON instead of plain lines");
    eprintln!("  --add-to-list   append the records to the persisted shopping list");
    eprintln!("  --save TITLE    store the recipe text under TITLE, split into sections");
}

fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    config.validate()?;
    init_tracing(&config.log)?;
    info!("{}", config.summary());

    let mut json_output = false;
    let mut add_to_list = false;
    let mut save_title: Option<String> = None;
    let mut input_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json_output = true,
            "--add-to-list" => add_to_list = true,
            "--save" => {
                save_title = Some(args.next().context("--save requires a recipe title")?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            path => input_path = Some(path.to_string()),
        }
    }

    let raw_text = match &input_path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read recipe text from stdin")?;
            buffer
        }
    };

    let text = normalize_extracted_text(&raw_text);
    let ingredients = parse_recipe_text(&text);
    info!(count = ingredients.len(), "parsed ingredient records");

    if json_output {
        println!("{}", serde_json::to_string_pretty(&ingredients)?);
    } else {
        for ingredient in &ingredients {
            println!(
                "{} {} {}",
                ingredient.amount, ingredient.unit, ingredient.name
            );
        }
    }

    if add_to_list {
        let store = LocalStore::open(&config.storage.data_dir)?;
        let mut list = store.load_shopping_list()?;
        let added = list.add_ingredients(&ingredients);
        store.save_shopping_list(&list)?;
        info!(added, total = list.len(), "shopping list updated");
    }

    if let Some(title) = save_title {
        let title = validate_recipe_title(&title)
            .map_err(|key| anyhow::anyhow!("Invalid recipe title ({})", key))?;
        let sections = split_recipe_sections(&text);
        let store = LocalStore::open(&config.storage.data_dir)?;
        let recipe = SavedRecipe::new(
            &mut RandomIdGenerator,
            title,
            &sections.ingredients,
            &sections.steps,
        );
        store.save_recipe(&recipe)?;
        info!(recipe_id = %recipe.id, title = %recipe.title, "recipe saved");
    }

    Ok(())
}
