use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmamentError {
    #[error("Unknown craft weapon type: {0}")]
    UnknownWeapon(String),

    #[error("Craft weapon {weapon} references unknown item {item}")]
    UnknownItem { weapon: String, item: String },

    #[error("Invalid weapon rules: {}", .0.join(", "))]
    InvalidRule(Vec<String>),

    #[error("Invalid save record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ArmamentError>;
