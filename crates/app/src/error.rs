//! Error types for the campus app

use campus_core::View;

/// App result type
pub type Result<T> = std::result::Result<T, Error>;

/// App errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] campus_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Login required for {}", .0.path())]
    LoginRequired(View),

    #[error("Access to {} is forbidden", .0.path())]
    Forbidden(View),

    #[error("{} is not a dashboard", .0.path())]
    NotADashboard(View),

    #[error("Unknown user: {0}")]
    UnknownUser(String),
}
