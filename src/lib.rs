// Client library for the SocialSync social media management API.

// API module: HTTP client adapter plus the wire types it exchanges
pub mod api {
    pub mod client;

    pub mod dtos {
        pub mod account;
        pub mod auth;
        pub mod sub;
    }

    pub mod models {
        pub mod account;
        pub mod sub;
        pub mod user;
    }
}

// State stores
pub mod stores {
    pub mod accounts;
    pub mod session;
    pub mod subscription;
}

// Routing surface and navigation guard
pub mod router {
    pub mod guard;
    pub mod routes;
}

// Common utilities module
pub mod common {
    pub mod env_config;
    pub mod error;
    pub mod nav;
    pub mod storage;
}

// Logger module
pub mod logger;

// Re-export commonly used items for convenience
pub use api::client::ApiClient;
pub use common::env_config::Config;
pub use common::error::{ApiError, Res, StoreError};
pub use common::nav::Navigator;
pub use common::storage::{KeyValueStorage, LANGUAGE_KEY, MemoryStorage, TOKEN_KEY};
pub use router::guard::{GuardDecision, NavigationGuard, RouteGate};
pub use router::routes::{RouteLocation, RouteName, RouteTarget};
pub use stores::accounts::AccountStore;
pub use stores::session::SessionStore;
pub use stores::subscription::SubscriptionStore;
