use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog tier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
    Influencer,
    Business,
}

/// Immutable catalog entry fetched from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
    pub key: PlanTier,
    pub price: f64,
    /// Maximum number of connected accounts, unlimited when absent.
    pub account_limit: Option<i64>,
    /// Metric refresh frequency, in hours.
    pub update_frequency: i64,
    pub features: Vec<String>,
    /// Monthly token ceiling, unlimited when absent.
    pub token_limit: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
}

/// The user's subscription record. The backend is the source of truth;
/// the client replaces this wholesale on every mutation and never computes
/// billing state locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscription {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub status: SubscriptionStatus,
    pub current_period_end: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Snapshot of the plan at subscription time.
    pub plan: SubscriptionPlan,
}

impl UserSubscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}
