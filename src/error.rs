use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),
    #[error("Invalid config file: {0}")]
    Parse(String),
}

/// Startup errors surfaced from `main`. Steady-state update/render has no
/// error paths of its own.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Graphics error: {0}")]
    Graphics(#[from] pixels::Error),
    #[error("Window error: {0}")]
    Window(#[from] winit::error::OsError),
}
