use clap::Parser;
use std::path::PathBuf;

use rg_quote::error::{Error, Result};

/// Fetch a stock quote from the dashboard API.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbol to quote (e.g. AAPL, AMZN).
    pub symbol: Option<String>,

    /// Dotenv file holding the RG_DASHBOARD_* settings.
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,
}

impl Args {
    pub fn symbol(&self) -> Result<&str> {
        match self.symbol.as_deref().map(str::trim) {
            Some(symbol) if !symbol.is_empty() => Ok(symbol),
            _ => Err(Error::MissingSymbol),
        }
    }
}
