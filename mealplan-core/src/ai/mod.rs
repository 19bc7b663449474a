//! AI module for recipe generation.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `FakeAiClient` for tests and offline dry runs
//! - Configuration via environment variables
//! - Prompt templates, including the preference prompt compiler
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `MEALPLAN_AI_MODEL` (optional): Model name, e.g., "openai/gpt-4o-mini"
//! - `MEALPLAN_AI_MAX_TOKENS` (optional): Completion token limit
//! - `MEALPLAN_AI_TEMPERATURE` (optional): Sampling temperature, 0.0 to 2.0
//!
//! # Example
//!
//! ```ignore
//! use mealplan_core::ai::{generate_recipe, GenerationConfig};
//! use mealplan_core::RecipePreferences;
//!
//! let prefs = RecipePreferences::from_json(r#"{"protein": "chicken"}"#)?;
//! let config = GenerationConfig::from_env()?;
//! let result = generate_recipe(&client, &prefs, &config).await?;
//! println!("{}", result.recipe.title);
//! ```

mod client;
mod config;
mod fake;
mod generate;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError};
pub use config::{ConfigError, GenerationConfig};
pub use fake::FakeAiClient;
pub use generate::{
    build_generate_recipe_request, generate_recipe, GenerateRecipeResult, GeneratedIngredient,
    GeneratedRecipe,
};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
