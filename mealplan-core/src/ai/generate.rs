//! Recipe generation: preferences in, validated recipe out.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::generate_recipe::{
    render_generate_recipe_system_prompt, render_generate_recipe_user_prompt,
    GENERATE_RECIPE_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, GenerationConfig, Usage};
use crate::preferences::RecipePreferences;

/// Longest prep or cook time accepted from the model: one week.
pub const MAX_STEP_MINUTES: u32 = 7 * 24 * 60;

/// One ingredient of a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    pub name: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Recipe returned by the model, after shape validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ingredients: Vec<GeneratedIngredient>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GeneratedRecipe {
    /// Parse and validate a model response.
    pub fn from_response(content: &str) -> Result<Self, AiError> {
        let recipe: GeneratedRecipe = serde_json::from_str(strip_code_fence(content))
            .map_err(|e| AiError::ParseError(format!("Failed to parse recipe response: {}", e)))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Check the fields the rest of the app relies on.
    pub fn validate(&self) -> Result<(), AiError> {
        if self.title.trim().is_empty() {
            return Err(AiError::InvalidRecipe("title is empty".to_string()));
        }
        if self.ingredients.is_empty() {
            return Err(AiError::InvalidRecipe("no ingredients".to_string()));
        }
        if let Some(pos) = self
            .ingredients
            .iter()
            .position(|i| i.name.trim().is_empty())
        {
            return Err(AiError::InvalidRecipe(format!(
                "ingredient {} has no name",
                pos + 1
            )));
        }
        if !self.instructions.iter().any(|s| !s.trim().is_empty()) {
            return Err(AiError::InvalidRecipe("no instructions".to_string()));
        }
        for (label, minutes) in [
            ("prep_time_minutes", self.prep_time_minutes),
            ("cook_time_minutes", self.cook_time_minutes),
        ] {
            if minutes.is_some_and(|m| m > MAX_STEP_MINUTES) {
                return Err(AiError::InvalidRecipe(format!(
                    "{} exceeds {} minutes",
                    label, MAX_STEP_MINUTES
                )));
            }
        }
        if self.servings == Some(0) {
            return Err(AiError::InvalidRecipe("servings must be positive".to_string()));
        }
        Ok(())
    }

    /// Prep plus cook time, if either is known.
    pub fn total_time_minutes(&self) -> Option<u32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }
}

/// Result of recipe generation.
pub struct GenerateRecipeResult {
    pub recipe: GeneratedRecipe,
    pub cached: bool,
    pub usage: Usage,
}

/// Build the generation request for `prefs` without sending it.
pub fn build_generate_recipe_request(
    prefs: &RecipePreferences,
    config: &GenerationConfig,
) -> ChatRequest {
    ChatRequest {
        messages: vec![
            ChatMessage::system(render_generate_recipe_system_prompt()),
            ChatMessage::user(render_generate_recipe_user_prompt(prefs)),
        ],
        model: Some(config.model.clone()),
        json_response: true,
        max_tokens: Some(config.max_tokens),
        temperature: Some(config.temperature),
    }
}

/// Generate a recipe matching `prefs`.
///
/// Empty preferences are allowed; the model is then asked for any balanced meal.
pub async fn generate_recipe(
    ai_client: &dyn AiClient,
    prefs: &RecipePreferences,
    config: &GenerationConfig,
) -> Result<GenerateRecipeResult, AiError> {
    let request = build_generate_recipe_request(prefs, config);

    tracing::debug!(
        prompt_name = GENERATE_RECIPE_PROMPT_NAME,
        model = %config.model,
        has_preferences = !prefs.is_empty(),
        "Requesting generated recipe"
    );

    let response = ai_client
        .complete(GENERATE_RECIPE_PROMPT_NAME, request)
        .await?;

    let recipe = GeneratedRecipe::from_response(&response.content).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected generated recipe");
    })?;

    Ok(GenerateRecipeResult {
        recipe,
        cached: response.cached,
        usage: response.usage,
    })
}

/// Some models wrap JSON in a ```json fence despite instructions.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
