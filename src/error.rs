use thiserror::Error;

#[derive(Error, Debug)]
pub enum Rb209Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Rb209Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Rb209Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Rb209Error>;

/// Build the "Unknown <field> 'x'. Valid options: a, b, c" error used by every slug parser.
pub fn unknown_option<'a>(
    field: &str,
    value: &str,
    valid: impl IntoIterator<Item = &'a str>,
) -> Rb209Error {
    let valid: Vec<&str> = valid.into_iter().collect();
    Rb209Error::InvalidInput(format!(
        "Unknown {} '{}'. Valid options: {}",
        field,
        value,
        valid.join(", ")
    ))
}
