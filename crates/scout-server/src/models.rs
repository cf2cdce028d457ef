use serde::{Deserialize, Serialize};
use scout_core::ParsedQuery;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequest {
    pub query: String,
    pub default_location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InterpretParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InterpretResponse {
    #[serde(flatten)]
    pub parsed: ParsedQuery,
    pub fingerprint: String,
}
