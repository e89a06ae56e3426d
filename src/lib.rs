//! Dashboard quote client: trade email/password for an auth token, then
//! fetch one ticker's quote with it.

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod quotes;
pub mod schema;

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::quotes::QuoteOutcome;

/// Authenticates, fetches the quote for `symbol` and reports it to `out`.
///
/// Strictly sequential: the quote endpoint is only called once a token has
/// been granted. A rejected quote is returned as an outcome, not an error.
pub async fn run(config: &Config, symbol: &str, out: impl Write) -> Result<QuoteOutcome> {
    let client = engine::http_client()?;

    let token = auth::authenticate(&client, config).await?;
    let outcome = quotes::fetch_quote(&client, &config.host, &token, symbol).await?;
    outcome.report(symbol, out)?;

    Ok(outcome)
}
