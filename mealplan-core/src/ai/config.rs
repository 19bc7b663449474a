//! Recipe generation settings from environment variables.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Default model to use.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Default completion token limit for a generated recipe.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Default sampling temperature. Recipes benefit from some variety.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}

/// Settings applied to every recipe generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Model name (e.g., "openai/gpt-4o-mini").
    pub model: String,
    /// Completion token limit.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GenerationConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `MEALPLAN_AI_MODEL`: Model name (default: "openai/gpt-4o-mini")
    /// - `MEALPLAN_AI_MAX_TOKENS`: Completion token limit (default: 2048)
    /// - `MEALPLAN_AI_TEMPERATURE`: Sampling temperature (default: 0.7)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let model = lookup("MEALPLAN_AI_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.model);

        let max_tokens = parse_var(&lookup, "MEALPLAN_AI_MAX_TOKENS")?
            .unwrap_or(defaults.max_tokens);

        let temperature: f32 = parse_var(&lookup, "MEALPLAN_AI_TEMPERATURE")?
            .unwrap_or(defaults.temperature);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidEnvVar {
                name: "MEALPLAN_AI_TEMPERATURE".to_string(),
                value: temperature.to_string(),
            });
        }

        Ok(Self {
            model,
            max_tokens,
            temperature,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GenerationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = GenerationConfig::from_lookup(lookup_from(&[
            ("MEALPLAN_AI_MODEL", "anthropic/claude-sonnet-4"),
            ("MEALPLAN_AI_MAX_TOKENS", " 1024 "),
            ("MEALPLAN_AI_TEMPERATURE", "0.2"),
        ]))
        .unwrap();
        assert_eq!(config.model, "anthropic/claude-sonnet-4");
        assert_eq!(config.max_tokens, 1024);
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_max_tokens() {
        let err =
            GenerationConfig::from_lookup(lookup_from(&[("MEALPLAN_AI_MAX_TOKENS", "lots")]))
                .unwrap_err();
        let ConfigError::InvalidEnvVar { name, value } = err;
        assert_eq!(name, "MEALPLAN_AI_MAX_TOKENS");
        assert_eq!(value, "lots");
    }

    #[test]
    fn test_temperature_out_of_range() {
        let result =
            GenerationConfig::from_lookup(lookup_from(&[("MEALPLAN_AI_TEMPERATURE", "5")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_model_uses_default() {
        let config =
            GenerationConfig::from_lookup(lookup_from(&[("MEALPLAN_AI_MODEL", "  ")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
