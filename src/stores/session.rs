use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{error, warn};

use crate::api::client::ApiClient;
use crate::api::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest, UpdateLanguageRequest};
use crate::api::models::account::SocialMediaAccount;
use crate::api::models::user::User;
use crate::common::error::Res;
use crate::common::nav::Navigator;
use crate::common::storage::{KeyValueStorage, LANGUAGE_KEY, TOKEN_KEY};
use crate::router::routes::{RouteName, RouteTarget};

struct SessionState {
    token: Option<String>,
    user: Option<User>,
    locale: String,
}

/// Holds the authenticated user and the session credential, and orchestrates
/// login/registration/logout/identity-refresh against the HTTP client
/// adapter. Authentication state is strictly a function of credential
/// presence.
pub struct SessionStore {
    api: Arc<ApiClient>,
    storage: Arc<dyn KeyValueStorage>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Restores the credential and locale preference from persistent
    /// storage.
    pub fn new(
        api: Arc<ApiClient>,
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
        default_language: &str,
    ) -> Self {
        let token = storage.get(TOKEN_KEY);
        let locale = storage
            .get(LANGUAGE_KEY)
            .unwrap_or_else(|| default_language.to_string());
        SessionStore {
            api,
            storage,
            navigator,
            state: RwLock::new(SessionState {
                token,
                user: None,
                locale,
            }),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().expect("session state lock poisoned")
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().expect("session state lock poisoned")
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn locale(&self) -> String {
        self.state().locale.clone()
    }

    /// Tier label for display: "free" until an identity is loaded. The
    /// authoritative subscription record lives in the subscription store.
    pub fn subscription_tier(&self) -> String {
        self.state()
            .user
            .as_ref()
            .map(|user| user.subscription_type.clone())
            .unwrap_or_else(|| "free".to_string())
    }

    /// Validates a restored credential by fetching the identity. Any failure
    /// means the credential is stale: perform a full logout. No-op when no
    /// credential was restored.
    pub async fn initialize(&self) {
        if !self.is_authenticated() {
            return;
        }
        if let Err(err) = self.fetch_user().await {
            warn!("Stored credential rejected, logging out: {err}");
            self.logout().await;
        }
    }

    /// Fetches the identity and caches it, adopting the user's language
    /// preference into the locale slot.
    pub async fn fetch_user(&self) -> Res<User> {
        match self.api.get::<User>("/user").await {
            Ok(user) => {
                self.set_user(user.clone());
                Ok(user)
            }
            Err(err) => {
                error!("Failed to fetch user: {err}");
                Err(err)
            }
        }
    }

    fn set_user(&self, user: User) {
        let mut state = self.state_mut();
        if !user.language.is_empty() {
            state.locale = user.language.clone();
        }
        state.user = Some(user);
    }

    fn set_token(&self, token: &str) {
        self.state_mut().token = Some(token.to_string());
        self.storage.set(TOKEN_KEY, token);
        self.api.set_token(token);
    }

    /// Exchanges credentials for a token, then fetches the identity.
    pub async fn login(&self, email: &str, password: &str) -> Res<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.api.post("/login", &request).await.inspect_err(|err| {
            error!("Login failed: {err}");
        })?;
        self.set_token(&response.token);
        self.fetch_user().await?;
        Ok(())
    }

    /// Same contract as `login` via the registration endpoint. The backend
    /// is the sole validator of confirmation matching and uniqueness.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Res<()> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        };
        let response: AuthResponse =
            self.api.post("/register", &request).await.inspect_err(|err| {
                error!("Registration failed: {err}");
            })?;
        self.set_token(&response.token);
        self.fetch_user().await?;
        Ok(())
    }

    /// Notifies the backend best-effort, then unconditionally clears the
    /// credential, user, persisted token, and adapter credential, and
    /// navigates to login. Logout always succeeds locally.
    pub async fn logout(&self) {
        if self.is_authenticated() {
            if let Err(err) = self
                .api
                .post::<serde_json::Value, _>("/logout", &serde_json::json!({}))
                .await
            {
                warn!("Backend logout notification failed: {err}");
            }
        }

        {
            let mut state = self.state_mut();
            state.token = None;
            state.user = None;
        }
        self.storage.remove(TOKEN_KEY);
        self.api.clear_token();
        self.navigator.navigate(RouteTarget::named(RouteName::Login));
    }

    /// Persists a locale preference to the backend, then updates the cached
    /// user and the locale slot.
    pub async fn update_language(&self, language: &str) -> Res<()> {
        let request = UpdateLanguageRequest {
            language: language.to_string(),
        };
        let _: serde_json::Value = self
            .api
            .put("/user/language", &request)
            .await
            .inspect_err(|err| {
                error!("Failed to update language: {err}");
            })?;

        let mut state = self.state_mut();
        if let Some(user) = state.user.as_mut() {
            user.language = language.to_string();
        }
        state.locale = language.to_string();
        drop(state);
        self.storage.set(LANGUAGE_KEY, language);
        Ok(())
    }

    /// Capability check gating the Bluesky-only routes. Intentionally
    /// fail-closed: any fetch failure collapses to `false` rather than
    /// propagating, so an indeterminate account never unlocks the gate.
    /// The raw route parameter goes into the path unparsed; a malformed id
    /// becomes a backend 404 and therefore `false`.
    pub async fn check_is_bluesky_account(&self, account_id: &str) -> bool {
        match self
            .api
            .get::<SocialMediaAccount>(&format!("/accounts/{account_id}"))
            .await
        {
            Ok(account) => account.platform.is_bluesky(),
            Err(err) => {
                error!("Failed to check account platform: {err}");
                false
            }
        }
    }
}
