use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::error;

use crate::api::client::ApiClient;
use crate::api::dtos::account::AddAccountRequest;
use crate::api::models::account::{Platform, SocialMediaAccount};
use crate::common::error::{ApiError, StoreError};

struct AccountState {
    accounts: Vec<SocialMediaAccount>,
    current: Option<SocialMediaAccount>,
    loading: bool,
    error: Option<String>,
}

/// Holds the collection of connected social accounts and the currently
/// selected one. Every operation records a display-ready error message on
/// failure and returns it to the caller; the current-account reference is
/// always an id present in the collection.
pub struct AccountStore {
    api: Arc<ApiClient>,
    state: RwLock<AccountState>,
}

impl AccountStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        AccountStore {
            api,
            state: RwLock::new(AccountState {
                accounts: Vec::new(),
                current: None,
                loading: false,
                error: None,
            }),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, AccountState> {
        self.state.read().expect("account state lock poisoned")
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, AccountState> {
        self.state.write().expect("account state lock poisoned")
    }

    pub fn accounts(&self) -> Vec<SocialMediaAccount> {
        self.state().accounts.clone()
    }

    pub fn current_account(&self) -> Option<SocialMediaAccount> {
        self.state().current.clone()
    }

    pub fn account_count(&self) -> usize {
        self.state().accounts.len()
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    fn begin(&self) {
        let mut state = self.state_mut();
        state.loading = true;
        state.error = None;
    }

    fn fail(&self, err: ApiError, fallback: &str) -> StoreError {
        error!("{fallback}: {err}");
        let store_err = StoreError::from_api(&err, fallback);
        let mut state = self.state_mut();
        state.error = Some(store_err.0.clone());
        state.loading = false;
        store_err
    }

    fn finish(&self) {
        self.state_mut().loading = false;
    }

    pub async fn fetch_accounts(&self) -> Result<Vec<SocialMediaAccount>, StoreError> {
        self.begin();
        let accounts: Vec<SocialMediaAccount> = self
            .api
            .get("/accounts")
            .await
            .map_err(|err| self.fail(err, "Failed to fetch accounts"))?;
        self.state_mut().accounts = accounts.clone();
        self.finish();
        Ok(accounts)
    }

    /// Fetches one account and makes it the current selection.
    pub async fn fetch_account(&self, id: i64) -> Result<SocialMediaAccount, StoreError> {
        self.begin();
        let account: SocialMediaAccount = self
            .api
            .get(&format!("/accounts/{id}"))
            .await
            .map_err(|err| self.fail(err, "Failed to fetch account"))?;
        self.state_mut().current = Some(account.clone());
        self.finish();
        Ok(account)
    }

    /// Connects a new account and appends it to the collection.
    pub async fn add_account(
        &self,
        platform: Platform,
        username: &str,
        token: &str,
    ) -> Result<SocialMediaAccount, StoreError> {
        self.begin();
        let request = AddAccountRequest {
            platform,
            username: username.to_string(),
            token: token.to_string(),
        };
        let account: SocialMediaAccount = self
            .api
            .post("/accounts", &request)
            .await
            .map_err(|err| self.fail(err, "Failed to add account"))?;
        self.state_mut().accounts.push(account.clone());
        self.finish();
        Ok(account)
    }

    /// Deletes an account. Clears the current-account reference when it
    /// pointed at the removed id.
    pub async fn remove_account(&self, id: i64) -> Result<(), StoreError> {
        self.begin();
        self.api
            .delete(&format!("/accounts/{id}"))
            .await
            .map_err(|err| self.fail(err, "Failed to remove account"))?;

        let mut state = self.state_mut();
        state.accounts.retain(|account| account.id != id);
        if state.current.as_ref().is_some_and(|current| current.id == id) {
            state.current = None;
        }
        state.loading = false;
        Ok(())
    }

    /// Resyncs one account's derived metrics, replacing it in place in the
    /// collection and in the current selection when it is the selected one.
    pub async fn refresh_account_data(&self, id: i64) -> Result<SocialMediaAccount, StoreError> {
        self.begin();
        let account: SocialMediaAccount = self
            .api
            .post(&format!("/accounts/{id}/refresh"), &serde_json::json!({}))
            .await
            .map_err(|err| self.fail(err, "Failed to refresh account data"))?;

        let mut state = self.state_mut();
        if let Some(slot) = state.accounts.iter_mut().find(|existing| existing.id == id) {
            *slot = account.clone();
        }
        if state.current.as_ref().is_some_and(|current| current.id == id) {
            state.current = Some(account.clone());
        }
        state.loading = false;
        Ok(account)
    }
}
