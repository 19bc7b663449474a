//! Recipe preference record and its closed value sets.
//!
//! The front end sends preferences as camelCase JSON with every field optional.
//! Closed sets (meal type, recipe type, time constraint, dietary restrictions)
//! are Rust enums; cooking method stays free-form text, with [`CookingMethod`]
//! offered only as a pick-list for UIs.
//!
//! Decoding is lenient per field: an unknown enum value, a dietary list entry
//! outside the closed set, or a servings value that is not a positive 32-bit
//! integer is dropped instead of failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::PreferencesError;

/// Structured user input describing the recipe they want.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipePreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub meal_type: Option<MealType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub recipe_type: Option<RecipeType>,
    /// Free-form; see [`CookingMethod`] for the suggested values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_method: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub time_constraint: Option<TimeConstraint>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_servings"
    )]
    pub servings: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_list"
    )]
    pub dietary_restrictions: Option<Vec<DietaryRestriction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl RecipePreferences {
    /// Decode a preferences payload as sent by the front end.
    pub fn from_json(json: &str) -> Result<Self, PreferencesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when no field would contribute a line to the compiled prompt.
    ///
    /// Empty strings and empty lists count as absent, and so does `servings: 0`.
    pub fn is_empty(&self) -> bool {
        fn blank(s: &Option<String>) -> bool {
            s.as_deref().is_none_or(str::is_empty)
        }
        fn none_listed<T>(v: &Option<Vec<T>>) -> bool {
            v.as_ref().is_none_or(Vec::is_empty)
        }

        blank(&self.protein)
            && none_listed(&self.vegetables)
            && none_listed(&self.fruits)
            && blank(&self.cuisine)
            && self.meal_type.is_none()
            && self.recipe_type.is_none()
            && blank(&self.cooking_method)
            && self.time_constraint.is_none()
            && self.servings.unwrap_or(0) == 0
            && none_listed(&self.dietary_restrictions)
            && blank(&self.additional_notes)
    }
}

fn parse_lenient<T>(raw: &Value) -> Option<T>
where
    T: FromStr<Err = PreferencesError>,
{
    match raw {
        Value::Null => None,
        Value::String(s) => s
            .parse()
            .inspect_err(|e| tracing::debug!(error = %e, "Dropping preference value"))
            .ok(),
        other => {
            tracing::debug!(value = %other, "Dropping non-text preference value");
            None
        }
    }
}

fn lenient_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = PreferencesError>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(parse_lenient(&raw))
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = PreferencesError>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.iter().filter_map(parse_lenient).collect())),
        other => {
            tracing::debug!(value = %other, "Dropping non-list preference value");
            Ok(None)
        }
    }
}

fn lenient_servings<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let servings = raw.as_u64().and_then(|n| u32::try_from(n).ok());
    if servings.is_none() && !raw.is_null() {
        tracing::debug!(value = %raw, "Dropping servings value");
    }
    Ok(servings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: &'static [MealType] = &[
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    FullMeal,
    Entree,
    Side,
    Dessert,
    Appetizer,
    Snack,
    Drink,
    Other,
}

impl RecipeType {
    pub const ALL: &'static [RecipeType] = &[
        RecipeType::FullMeal,
        RecipeType::Entree,
        RecipeType::Side,
        RecipeType::Dessert,
        RecipeType::Appetizer,
        RecipeType::Snack,
        RecipeType::Drink,
        RecipeType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::FullMeal => "full_meal",
            RecipeType::Entree => "entree",
            RecipeType::Side => "side",
            RecipeType::Dessert => "dessert",
            RecipeType::Appetizer => "appetizer",
            RecipeType::Snack => "snack",
            RecipeType::Drink => "drink",
            RecipeType::Other => "other",
        }
    }
}

/// How much time the cook has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConstraint {
    Quick,
    Medium,
    Leisurely,
}

impl TimeConstraint {
    pub const ALL: &'static [TimeConstraint] = &[
        TimeConstraint::Quick,
        TimeConstraint::Medium,
        TimeConstraint::Leisurely,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeConstraint::Quick => "quick",
            TimeConstraint::Medium => "medium",
            TimeConstraint::Leisurely => "leisurely",
        }
    }

    /// Human phrase used in prompts.
    pub fn duration_phrase(&self) -> &'static str {
        match self {
            TimeConstraint::Quick => "under 30 minutes",
            TimeConstraint::Medium => "30-60 minutes",
            TimeConstraint::Leisurely => "over 60 minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    Keto,
    LowSodium,
    Halal,
    Kosher,
}

impl DietaryRestriction {
    pub const ALL: &'static [DietaryRestriction] = &[
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::NutFree,
        DietaryRestriction::Keto,
        DietaryRestriction::LowSodium,
        DietaryRestriction::Halal,
        DietaryRestriction::Kosher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::NutFree => "nut-free",
            DietaryRestriction::Keto => "keto",
            DietaryRestriction::LowSodium => "low-sodium",
            DietaryRestriction::Halal => "halal",
            DietaryRestriction::Kosher => "kosher",
        }
    }
}

/// Suggested cooking methods for pick-lists.
///
/// Preferences store the cooking method as text, so values outside this list
/// are accepted everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CookingMethod {
    Stovetop,
    Oven,
    Grill,
    SlowCooker,
    InstantPot,
    AirFryer,
    NoCook,
}

impl CookingMethod {
    pub const ALL: &'static [CookingMethod] = &[
        CookingMethod::Stovetop,
        CookingMethod::Oven,
        CookingMethod::Grill,
        CookingMethod::SlowCooker,
        CookingMethod::InstantPot,
        CookingMethod::AirFryer,
        CookingMethod::NoCook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CookingMethod::Stovetop => "stovetop",
            CookingMethod::Oven => "oven",
            CookingMethod::Grill => "grill",
            CookingMethod::SlowCooker => "slow-cooker",
            CookingMethod::InstantPot => "instant-pot",
            CookingMethod::AirFryer => "air-fryer",
            CookingMethod::NoCook => "no-cook",
        }
    }
}

/// `Display`/`FromStr` over the `as_str` spelling, case-insensitive on input.
macro_rules! impl_wire_name {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = PreferencesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| PreferencesError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_wire_name!(MealType, "mealType");
impl_wire_name!(RecipeType, "recipeType");
impl_wire_name!(TimeConstraint, "timeConstraint");
impl_wire_name!(DietaryRestriction, "dietaryRestrictions");
impl_wire_name!(CookingMethod, "cookingMethod");
