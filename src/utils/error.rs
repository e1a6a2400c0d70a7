use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Sheet request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sheet request returned HTTP status {code}")]
    Status { code: u16 },

    #[error("Invalid sheet export URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {field}: {reason}")]
    Config { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
