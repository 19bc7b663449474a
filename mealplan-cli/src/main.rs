use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mealplan_core::ai::prompts::{
    render_generate_recipe_system_prompt, render_generate_recipe_user_prompt,
};
use mealplan_core::ai::{generate_recipe, FakeAiClient, GenerationConfig};
use mealplan_core::{render_preferences_prompt, RecipePreferences};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "mealplan")]
#[command(about = "Meal planner recipe prompt tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the prompt block compiled from a preferences JSON file
    Prompt {
        /// Preferences JSON file (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the system and user prompts sent when generating a recipe
    GeneratePrompt {
        /// Preferences JSON file (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Run recipe generation offline against a canned model response
    Generate {
        /// Preferences JSON file (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
        /// File containing the model response to validate
        #[arg(long)]
        fake_response: PathBuf,
    },
}

/// Console logging only, on stderr so stdout stays pipeable.
fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prompt { file } => {
            let prefs = load_preferences(file.as_deref())?;
            println!("{}", render_preferences_prompt(&prefs));
        }
        Commands::GeneratePrompt { file } => {
            let prefs = load_preferences(file.as_deref())?;
            println!("=== system ===");
            println!("{}", render_generate_recipe_system_prompt());
            println!();
            println!("=== user ===");
            println!("{}", render_generate_recipe_user_prompt(&prefs));
        }
        Commands::Generate {
            file,
            fake_response,
        } => {
            let prefs = load_preferences(file.as_deref())?;
            generate(&prefs, &fake_response).await?;
        }
    }

    Ok(())
}

async fn generate(prefs: &RecipePreferences, fake_response: &Path) -> Result<()> {
    let config = GenerationConfig::from_env()?;
    let response = fs::read_to_string(fake_response)
        .with_context(|| format!("Failed to read {}", fake_response.display()))?;
    let client = FakeAiClient::new().with_default_response(&response);

    let result = generate_recipe(&client, prefs, &config).await?;
    tracing::info!(
        title = %result.recipe.title,
        ingredients = result.recipe.ingredients.len(),
        "Generated recipe passed validation"
    );

    println!("{}", serde_json::to_string_pretty(&result.recipe)?);
    Ok(())
}

fn load_preferences(file: Option<&Path>) -> Result<RecipePreferences> {
    let json = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read preferences from stdin")?;
            buf
        }
    };

    let prefs = RecipePreferences::from_json(&json)?;
    if prefs.is_empty() {
        tracing::debug!("No preferences set, using fallback prompt");
    }
    Ok(prefs)
}
