use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub plan_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseTokensRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseTokensResponse {
    /// Token balance after the purchase.
    pub tokens: i64,
}
