use serde::{Deserialize, Serialize};

use crate::api::models::account::Platform;

#[derive(Debug, Serialize, Deserialize)]
pub struct AddAccountRequest {
    pub platform: Platform,
    pub username: String,
    /// Platform-issued access token for the account being connected.
    pub token: String,
}
