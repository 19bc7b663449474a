//! Prompts for generating a new recipe from user preferences.

use super::preferences::render_preferences_prompt;
use crate::preferences::RecipePreferences;

/// Prompt name used when calling the AI client.
pub const GENERATE_RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Render the system prompt describing the expected JSON output.
pub fn render_generate_recipe_system_prompt() -> String {
    r#"You are a creative home-cooking assistant. The user describes the meal they want and you invent one recipe that fits.

Return the recipe as JSON with this exact structure:
{
  "title": "Recipe Title",
  "description": "One or two sentences describing the dish",
  "ingredients": [
    {"name": "ingredient name", "amount": "1", "unit": "cup"}
  ],
  "instructions": ["First step", "Second step"],
  "prep_time_minutes": 10,
  "cook_time_minutes": 20,
  "servings": 4,
  "tags": ["dinner", "thai"]
}

Rules:
- Dietary restrictions are mandatory. Never include an ingredient that violates one.
- Use "amount" and "unit" only when they make sense; use null otherwise.
- Write each instruction as a single clear step, without step numbers.
- Use whole minutes for times and null if a time does not apply.
- Return ONLY the JSON, no other text"#
        .to_string()
}

/// Render the user prompt, embedding the compiled preference block.
pub fn render_generate_recipe_user_prompt(prefs: &RecipePreferences) -> String {
    format!(
        "Create a recipe that matches these preferences.\n\nPreferences:\n{}",
        render_preferences_prompt(prefs)
    )
}
