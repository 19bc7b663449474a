pub mod ai;
pub mod error;
pub mod preferences;

pub use ai::prompts::{render_preferences_prompt, NO_PREFERENCES_FALLBACK};
pub use error::PreferencesError;
pub use preferences::{
    CookingMethod, DietaryRestriction, MealType, RecipePreferences, RecipeType, TimeConstraint,
};
