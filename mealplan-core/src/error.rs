use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Invalid preferences JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

impl From<serde_json::Error> for PreferencesError {
    fn from(e: serde_json::Error) -> Self {
        PreferencesError::InvalidJson(e.to_string())
    }
}
