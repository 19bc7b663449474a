//! AI prompt templates.

pub mod generate_recipe;
pub mod preferences;

pub use generate_recipe::{
    render_generate_recipe_system_prompt, render_generate_recipe_user_prompt,
    GENERATE_RECIPE_PROMPT_NAME,
};
pub use preferences::{render_preferences_prompt, NO_PREFERENCES_FALLBACK};
