//! book2action - turn a book title into a summary and a 7-day action plan

use std::collections::HashSet;

use anyhow::{Context, Result};
use book2action::calendar;
use book2action::links;
use book2action::trending::{self, TRENDING_BOOKS};
use book2action::{
    AppConfig, Book, BookSearchOrchestrator, LlmBookAnalyzer, LocalCatalog, ResponseNormalizer,
    Validation,
};
use clap::{Parser, Subcommand};
use llm_client::{Config, ModelPreset, ProviderKind};

#[derive(Parser, Debug)]
#[command(
    name = "book2action",
    about = "Turn a book title into a summary and a 7-day action plan",
    long_about = "Looks a title up in the bundled catalog, falling back to an LLM analysis"
)]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a book and print its action plan
    Search {
        /// Book title
        title: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Model preset to use (overrides default from config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Show a selection of trending books
    Trending {
        /// Number of books to show (default from config)
        #[arg(short, long)]
        count: Option<usize>,

        /// Titles to leave out, e.g. the previous selection
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// List available model presets
    List,
    /// Store an API key for a provider
    SetKey {
        /// Provider (openrouter, openai)
        provider: String,
        /// API key
        key: String,
    },
    /// Set the default model preset
    SetModel {
        /// Name of the preset to use as default
        preset: String,
    },
    /// Add a new model preset
    AddPreset {
        /// Preset name
        name: String,
        /// Provider (openrouter, openai)
        #[arg(short, long)]
        provider: String,
        /// Model identifier
        #[arg(short = 'M', long)]
        model: String,
    },
    /// Set plan validation (strict or lenient)
    SetValidation {
        #[arg(value_parser = parse_validation)]
        mode: Validation,
    },
    /// Set the sampling temperature
    SetTemperature {
        /// Value (0.0-2.0)
        value: f32,
    },
}

fn parse_validation(s: &str) -> Result<Validation, String> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(Validation::Strict),
        "lenient" => Ok(Validation::Lenient),
        _ => Err(format!("expected strict or lenient, got {}", s)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &args.command {
        Commands::Search { title, json, model } => run_search(title, *json, model.as_deref()).await,
        Commands::Trending { count, exclude } => run_trending(*count, exclude),
        Commands::Config { action } => handle_config_command(action),
    }
}

async fn run_search(title: &str, json: bool, model: Option<&str>) -> Result<()> {
    let app_config = AppConfig::load().context("Failed to load book2action configuration")?;
    let llm_config = Config::load().context("Failed to load LLM configuration")?;

    let preset = model.or(app_config.preset.as_deref());
    let analyzer = LlmBookAnalyzer::from_config(&llm_config, preset, app_config.analyzer_settings());
    let orchestrator = BookSearchOrchestrator::new(
        LocalCatalog::builtin(),
        analyzer,
        ResponseNormalizer::new(app_config.validation),
    );

    let outcome = orchestrator.search(title).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }

    match outcome.result.book() {
        Some(book) => {
            print_book(book);
            Ok(())
        }
        None => {
            let message = outcome.result.error().unwrap_or_default();
            anyhow::bail!("{}", message)
        }
    }
}

fn print_book(book: &Book) {
    let today = chrono::Local::now().date_naive();

    println!("{} by {}", book.title, book.author);
    let mut meta = Vec::new();
    if let Some(year) = book.published_year {
        meta.push(year.to_string());
    }
    if let Some(genre) = &book.genre {
        meta.push(genre.clone());
    }
    if !meta.is_empty() {
        println!("{}", meta.join(" · "));
    }
    println!();

    for paragraph in book.summary_paragraphs() {
        println!("{}", paragraph);
        println!();
    }

    println!("Your 7-day plan:");
    for step in &book.actionable_steps {
        let day = step.day.as_deref().unwrap_or("Any day");
        println!();
        println!("{}: {}", day, step.step);
        println!("  {}", step.chapter);
        println!("  Key takeaway: {}", step.details.key_takeaway);
        if let Some(day) = &step.day {
            println!(
                "  Add to calendar: {}",
                calendar::calendar_link(&step.step, &book.title, day, today)
            );
        }
    }

    println!();
    if let Some(cover) = book.cover_image_url.as_deref().filter(|c| !c.is_empty()) {
        println!("Cover: {}", cover);
    }
    println!(
        "Buy: {}",
        links::amazon_link(&book.title, &book.author, book.isbn.as_deref())
    );
}

fn run_trending(count: Option<usize>, exclude: &[String]) -> Result<()> {
    let app_config = AppConfig::load().context("Failed to load book2action configuration")?;
    let count = count.unwrap_or(app_config.trending_count);
    let excluded: HashSet<String> = exclude.iter().cloned().collect();

    let picked = trending::select_trending(
        TRENDING_BOOKS,
        count,
        &excluded,
        &mut rand::thread_rng(),
    );

    println!("Trending books:");
    for book in picked {
        println!("  {} - {}", book.title, book.author);
    }
    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let app_config = AppConfig::load()?;
            let llm_config = Config::load()?;
            println!("Configuration file: {}", AppConfig::config_path()?.display());
            println!();
            match &app_config.preset {
                Some(preset) => println!("preset = \"{}\"", preset),
                None => println!("preset = (llm.toml default: {})", llm_config.default_preset),
            }
            println!("temperature = {}", app_config.temperature);
            println!("max_tokens = {}", app_config.max_tokens);
            println!("validation = {:?}", app_config.validation);
            println!("trending_count = {}", app_config.trending_count);
            println!();
            println!("LLM config file: {}", Config::config_path()?.display());
            for (name, provider) in &llm_config.providers {
                let key = if provider.api_key.is_some() { "set" } else { "(none)" };
                println!("[providers.{}] api_key = {}", name, key);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("Available presets:");
            let mut names: Vec<_> = config.presets.keys().collect();
            names.sort();
            for name in names {
                let preset = &config.presets[name];
                let default_marker = if *name == config.default_preset {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "  {} - {} / {}{}",
                    name, preset.provider, preset.model, default_marker
                );
            }
        }
        ConfigAction::SetKey { provider, key } => {
            let kind: ProviderKind = provider.parse()?;
            let mut config = Config::load()?;
            config.set_api_key(kind.id(), key.trim());
            config.save()?;
            println!("API key for {} saved", kind.display_name());
        }
        ConfigAction::SetModel { preset } => {
            let mut config = Config::load()?;
            // Verify preset exists
            config.get_preset(preset)?;
            config.default_preset = preset.clone();
            config.save()?;
            println!("Default preset set to: {}", preset);
        }
        ConfigAction::AddPreset {
            name,
            provider,
            model,
        } => {
            let kind: ProviderKind = provider.parse()?;
            let mut config = Config::load()?;
            config.presets.insert(
                name.clone(),
                ModelPreset {
                    provider: kind.id().to_string(),
                    model: model.clone(),
                },
            );
            config.save()?;
            println!("Added preset: {}", name);
        }
        ConfigAction::SetValidation { mode } => {
            let mut config = AppConfig::load()?;
            config.validation = *mode;
            config.save()?;
            println!("Plan validation set to: {:?}", config.validation);
        }
        ConfigAction::SetTemperature { value } => {
            let mut config = AppConfig::load()?;
            config.temperature = value.clamp(0.0, 2.0);
            config.save()?;
            println!("Default temperature set to: {}", config.temperature);
        }
    }
    Ok(())
}
