use thiserror::Error;

#[derive(Error, Debug)]
pub enum PyramidError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No mirror sign assigned for category '{category}'")]
    UnassignedCategory { category: String },

    #[error("Unknown color name '{name}' (expected one of: red, green, yellow, blue, magenta, cyan, white)")]
    InvalidColor { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PyramidError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
