use thiserror::Error;

/// Why a persisted graph was rejected. A rejected load never touches the
/// current graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("invalid graph format: {0}")]
    Malformed(String),
    #[error("missing required key '{0}'")]
    Incomplete(&'static str),
    #[error("too many {what} (max {max})")]
    Limit { what: &'static str, max: usize },
    #[error("field '{field}' must be a finite in-range number")]
    InvalidNumber { field: &'static str },
}

impl LoadError {
    /// Stable machine-readable code, mirrored by the browser binding.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Malformed(_) => "malformed_input",
            LoadError::Incomplete(_) => "incomplete_input",
            LoadError::Limit { .. } => "limit_exceeded",
            LoadError::InvalidNumber { .. } => "invalid_number",
        }
    }

    /// Text shown to the user when a load is refused.
    pub fn notice(&self) -> &'static str {
        match self {
            LoadError::Incomplete(_) => "Cannot load graph: Missing required data(nodes or edges).",
            _ => "Cannot load graph: Invalid format.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("parameter '{field}' out of range (got {value})")]
    OutOfRange { field: &'static str, value: f32 },
}
