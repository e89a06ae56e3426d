use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Config;

/*  DASHBOARD WIRE FORMAT
    =====================

    1) POST /authenticate
        => body {"email", "password"}; reply carries "auth_token" on 2xx

    2) GET /api/v1/quotes/{symbol}
        => reply is always {"quote": {..}, "error": {..}}
        => the status code picks which half is meaningful, never the contents

    3) Keys may be missing or null on either half
        => zero values (empty string, 0.0, empty list) instead of a decode error
*/

// authenticate request body
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Config> for Credentials<'a> {
    fn from(config: &'a Config) -> Self {
        Credentials {
            email: &config.email,
            password: &config.password,
        }
    }
}

// quote endpoint reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteResponse {
    #[serde(deserialize_with = "de_nullable")]
    pub quote: Quote,
    #[serde(deserialize_with = "de_nullable")]
    pub error: ApiError,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub ticker: String,
    pub ticker_color: String,
    pub company_name: String,
    pub open_price: f64,
    pub delta: f64,
    pub current_price: f64,
    #[serde(deserialize_with = "de_nullable")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub title: String,
    pub code: String,
    pub detail: String,
}

// null decodes the same as a missing key
fn de_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
