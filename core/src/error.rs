use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Action #{index} has an empty name")]
    EmptyActionName { index: usize },
    #[error("Catalog entry {key:?} is not a string")]
    NotAString { key: String },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
