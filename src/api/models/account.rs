use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social network a connected account lives on. `Bluesky` is distinguished:
/// a subset of routes is only reachable for Bluesky accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Bluesky,
    Mastodon,
    Threads,
    Twitter,
}

impl Platform {
    pub fn is_bluesky(&self) -> bool {
        matches!(self, Platform::Bluesky)
    }
}

/// A connected social media account with its synced engagement counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMediaAccount {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub platform: Platform,
    pub avatar_url: String,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
