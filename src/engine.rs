use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use crate::error::Result;

// GENERALISED FUNCTIONS

// one client per process; redirects, pooling and timeouts are reqwest defaults
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

// join the configured host with an API path, tolerating a trailing slash on the host
pub fn endpoint(host: &str, path: &str) -> String {
    format!("{}/{}", host.trim_end_matches('/'), path.trim_start_matches('/'))
}

// read the whole body and hand back the status alongside it.
// the response is consumed here, so the connection is released on every branch the caller takes
pub async fn drain(response: Response) -> Result<(StatusCode, Bytes)> {
    // status has to be taken before the body consumes the response
    let status = response.status();
    let body = response.bytes().await?;
    Ok((status, body))
}

// serialise with a 4-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    // serde_json only ever writes valid utf-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
