use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

/// Which half of a selection failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Season,
    PlantType,
}

/// A season or plant type outside the accepted enumeration.
///
/// The message is user-facing and is rendered verbatim by every presenter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidInput {
    pub field: InputField,
    pub message: String,
}

impl InvalidInput {
    pub fn new(field: InputField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GardenOpsError>;
