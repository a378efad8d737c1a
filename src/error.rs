use thiserror::Error;

#[derive(Debug, Error)]
pub enum GmmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unknown choice '{value}'{}", did_you_mean(.suggestion))]
    UnknownChoice {
        value: String,
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean {}?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, GmmError>;
