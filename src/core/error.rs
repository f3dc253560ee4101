use thiserror::Error;

#[derive(Error, Debug)]
pub enum SketchError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SketchError>;
