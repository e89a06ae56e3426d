use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter a ticker symbol (e.g. AAPL, AMZN).")]
    MissingSymbol,
    #[error("Error loading {} file: {source}", path.display())]
    ConfigSource {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
    #[error("Missing configuration value: {0}")]
    ConfigMissing(&'static str),
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Whoops! Authentication token was not granted [Status Code {0}].")]
    AuthenticationRejected(u16),
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
