use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET /user`. The subscription
/// fields here are display caches; the authoritative subscription record
/// lives in the subscription store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub language: String,
    /// Tier label cached on the user record, e.g. "free" or "pro".
    pub subscription_type: String,
    /// Current token balance.
    pub tokens: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
