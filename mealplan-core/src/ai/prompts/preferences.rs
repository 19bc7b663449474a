//! Compiles a preference record into the prompt block sent to the model.

use crate::preferences::RecipePreferences;

/// Returned when no preference contributes a line.
pub const NO_PREFERENCES_FALLBACK: &str =
    "No specific preferences - create a delicious, balanced meal";

/// Label for dietary restrictions. Shouted so the model treats them as hard constraints.
pub const DIETARY_RESTRICTIONS_LABEL: &str = "DIETARY RESTRICTIONS (MUST RESPECT)";

/// Render one `- Label: value` line per present preference.
///
/// Lines always follow the same order: protein, vegetables, fruits, cuisine,
/// meal type, recipe type, cooking method, time, servings, dietary
/// restrictions, additional notes. Empty strings, empty lists and zero
/// servings are skipped. Returns [`NO_PREFERENCES_FALLBACK`] if nothing is left.
pub fn render_preferences_prompt(prefs: &RecipePreferences) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut push = |label: &str, value: &str| lines.push(format!("- {}: {}", label, value));

    if let Some(protein) = non_empty(&prefs.protein) {
        push("Protein", protein);
    }
    if let Some(vegetables) = non_empty_list(&prefs.vegetables) {
        push("Vegetables", &vegetables.join(", "));
    }
    if let Some(fruits) = non_empty_list(&prefs.fruits) {
        push("Fruits", &fruits.join(", "));
    }
    if let Some(cuisine) = non_empty(&prefs.cuisine) {
        push("Cuisine", cuisine);
    }
    if let Some(meal_type) = prefs.meal_type {
        push("Meal type", meal_type.as_str());
    }
    if let Some(recipe_type) = prefs.recipe_type {
        push("Recipe type", recipe_type.as_str());
    }
    if let Some(method) = non_empty(&prefs.cooking_method) {
        push("Cooking method", method);
    }
    if let Some(time) = prefs.time_constraint {
        push("Time", time.duration_phrase());
    }
    // Zero servings is dropped like an absent value.
    if let Some(servings) = prefs.servings.filter(|&n| n > 0) {
        push("Servings", &servings.to_string());
    }
    if let Some(restrictions) = non_empty_list(&prefs.dietary_restrictions) {
        let names: Vec<&str> = restrictions.iter().map(|r| r.as_str()).collect();
        push(DIETARY_RESTRICTIONS_LABEL, &names.join(", "));
    }
    if let Some(notes) = non_empty(&prefs.additional_notes) {
        push("Additional notes", notes);
    }

    if lines.is_empty() {
        return NO_PREFERENCES_FALLBACK.to_string();
    }
    lines.join("\n")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn non_empty_list<T>(values: &Option<Vec<T>>) -> Option<&[T]> {
    values.as_deref().filter(|v| !v.is_empty())
}
