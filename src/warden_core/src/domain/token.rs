use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GRANT_TYPE_BEARER: &str = "Bearer";

/// Distinguishes the two halves of a pair inside the signed claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Access,
    Refresh,
}

/// An access/refresh token pair as handed to the client.
///
/// The access half is self-contained; the refresh half is only honoured while
/// an identical copy is stored on the owning account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub grant_type: String,
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expires_at: DateTime<Utc>,
}
