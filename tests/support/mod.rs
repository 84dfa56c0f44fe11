#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use serde_json::json;
use socialsync_client::{ApiClient, MemoryStorage, Navigator, RouteTarget, SessionStore};

/// Navigator that records forced navigations for assertion.
#[derive(Default)]
pub struct RecordingNavigator {
    targets: RwLock<Vec<RouteTarget>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn targets(&self) -> Vec<RouteTarget> {
        self.targets.read().expect("navigator lock").clone()
    }

    pub fn last(&self) -> Option<RouteTarget> {
        self.targets().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: RouteTarget) {
        self.targets.write().expect("navigator lock").push(target);
    }
}

pub struct Harness {
    pub storage: Arc<MemoryStorage>,
    pub navigator: Arc<RecordingNavigator>,
    pub api: Arc<ApiClient>,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let navigator = RecordingNavigator::new();
        let api = Arc::new(ApiClient::new(
            base_url,
            storage.clone(),
            navigator.clone(),
        ));
        Harness {
            storage,
            navigator,
            api,
        }
    }

    /// Harness whose storage already holds a persisted credential.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        socialsync_client::KeyValueStorage::set(&*storage, socialsync_client::TOKEN_KEY, token);
        let navigator = RecordingNavigator::new();
        let api = Arc::new(ApiClient::new(
            base_url,
            storage.clone(),
            navigator.clone(),
        ));
        Harness {
            storage,
            navigator,
            api,
        }
    }

    pub fn session(&self) -> Arc<SessionStore> {
        Arc::new(SessionStore::new(
            self.api.clone(),
            self.storage.clone(),
            self.navigator.clone(),
            "en",
        ))
    }

    pub fn stored_token(&self) -> Option<String> {
        socialsync_client::KeyValueStorage::get(&*self.storage, socialsync_client::TOKEN_KEY)
    }
}

pub fn user_json(tokens: i64, tier: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Ada",
        "email": "ada@example.com",
        "language": "en",
        "subscription_type": tier,
        "tokens": tokens,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn account_json(id: i64, platform: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 1,
        "username": format!("user{id}"),
        "display_name": format!("User {id}"),
        "platform": platform,
        "avatar_url": "https://cdn.example.com/avatar.png",
        "follower_count": 100,
        "following_count": 50,
        "post_count": 10,
        "last_synced_at": "2024-01-01T00:00:00Z",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn plan_json(id: i64, key: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("{key} plan"),
        "key": key,
        "price": price,
        "account_limit": if key == "business" { None } else { Some(3) },
        "update_frequency": 24,
        "features": ["analytics", "giveaways"],
        "token_limit": Some(1000)
    })
}

pub fn subscription_json(id: i64, plan_id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 1,
        "plan_id": plan_id,
        "status": status,
        "current_period_end": "2026-09-01T00:00:00Z",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "plan": plan_json(plan_id, "pro", 9.99)
    })
}
