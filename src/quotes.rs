use log::{error, info};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::io::Write;

use crate::auth::AuthToken;
use crate::engine;
use crate::error::Result;
use crate::schema::{ApiError, QuoteResponse};

/// Which half of a quote reply the status code made authoritative.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// 200: the whole reply, printed as received.
    Quote(QuoteResponse),
    /// Anything else: the `error` half, with the HTTP status it came with.
    Rejected { status: u16, error: ApiError },
}

/// Fetches the quote for `symbol`, sending `token` verbatim as the
/// `Authorization` header.
///
/// The body is decoded whatever the status; a body that does not decode is
/// an error, while a well-formed rejection is a [`QuoteOutcome::Rejected`].
pub async fn fetch_quote(
    client: &Client,
    host: &str,
    token: &AuthToken,
    symbol: &str,
) -> Result<QuoteOutcome> {
    let url = engine::endpoint(host, &format!("/api/v1/quotes/{symbol}"));
    info!("Requesting {symbol} quote ...");

    let response = client
        .get(&url)
        .header(AUTHORIZATION, token.as_str())
        .send()
        .await?;
    let (status, body) = engine::drain(response).await?;

    let reply: QuoteResponse = serde_json::from_slice(&body)?;

    if status == StatusCode::OK {
        Ok(QuoteOutcome::Quote(reply))
    } else {
        Ok(QuoteOutcome::Rejected {
            status: status.as_u16(),
            error: reply.error,
        })
    }
}

impl QuoteOutcome {
    /// A quote reply goes to `out` as indented JSON; a rejection only goes to the log.
    pub fn report<W: Write>(&self, symbol: &str, mut out: W) -> Result<()> {
        match self {
            QuoteOutcome::Quote(reply) => {
                info!("Request for {symbol} quote was successful!");
                writeln!(out, "{}", engine::to_pretty_json(reply)?)?;
                out.flush()?;
            }
            QuoteOutcome::Rejected { status, error: api_error } => {
                error!("{}", rejection_message(*status, api_error));
            }
        }
        Ok(())
    }
}

// upstream `code` is free text and need not match the HTTP status
pub fn rejection_message(status: u16, error: &ApiError) -> String {
    format!(
        "Error: {} [Status Code {}] (HTTP {status}).",
        error.detail, error.code
    )
}
