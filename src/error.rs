use thiserror::Error;

/// Top-level error type for the room planner.
#[derive(Debug, Error)]
pub enum RoomplanError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by layout session mutations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("wall not found: {0}")]
    WallNotFound(String),

    #[error("placed item not found: {0}")]
    ItemNotFound(u32),

    #[error("furniture definition not found")]
    FurnitureNotFound,

    #[error("unknown opening kind: {0}")]
    UnknownOpeningKind(String),

    #[error("{what} must be a positive finite number, got {value}")]
    InvalidDimension { what: &'static str, value: f64 },
}

/// Errors raised while loading a [`LayoutConfig`](crate::config::LayoutConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value {field} = {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Convenience type alias for results using [`RoomplanError`].
pub type Result<T> = std::result::Result<T, RoomplanError>;
