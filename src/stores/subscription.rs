use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::error;

use crate::api::client::ApiClient;
use crate::api::dtos::sub::{PurchaseTokensRequest, PurchaseTokensResponse, SubscribeRequest};
use crate::api::models::sub::{SubscriptionPlan, UserSubscription};
use crate::common::error::{ApiError, StoreError};
use crate::stores::session::SessionStore;

struct SubscriptionState {
    plans: Vec<SubscriptionPlan>,
    current: Option<UserSubscription>,
    loading: bool,
    error: Option<String>,
}

/// Holds the plan catalog and the user's active subscription. Every
/// mutating operation re-fetches the user identity afterwards: subscription
/// changes move the tier label and token balance cached on the session's
/// user record.
pub struct SubscriptionStore {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    state: RwLock<SubscriptionState>,
}

impl SubscriptionStore {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        SubscriptionStore {
            api,
            session,
            state: RwLock::new(SubscriptionState {
                plans: Vec::new(),
                current: None,
                loading: false,
                error: None,
            }),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, SubscriptionState> {
        self.state.read().expect("subscription state lock poisoned")
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, SubscriptionState> {
        self.state.write().expect("subscription state lock poisoned")
    }

    pub fn plans(&self) -> Vec<SubscriptionPlan> {
        self.state().plans.clone()
    }

    pub fn current_subscription(&self) -> Option<UserSubscription> {
        self.state().current.clone()
    }

    pub fn current_plan(&self) -> Option<SubscriptionPlan> {
        self.state().current.as_ref().map(|sub| sub.plan.clone())
    }

    pub fn is_subscription_active(&self) -> bool {
        self.state()
            .current
            .as_ref()
            .is_some_and(UserSubscription::is_active)
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

    pub async fn fetch_plans(&self) -> Result<Vec<SubscriptionPlan>, StoreError> {
        self.begin();
        let plans: Vec<SubscriptionPlan> = self
            .api
            .get("/subscriptions")
            .await
            .map_err(|err| self.fail(err, "Failed to fetch subscription plans"))?;
        self.state_mut().plans = plans.clone();
        self.finish();
        Ok(plans)
    }

    pub async fn fetch_current_subscription(&self) -> Result<UserSubscription, StoreError> {
        self.begin();
        let subscription: UserSubscription = self
            .api
            .get("/subscriptions/current")
            .await
            .map_err(|err| self.fail(err, "Failed to fetch current subscription"))?;
        self.state_mut().current = Some(subscription.clone());
        self.finish();
        Ok(subscription)
    }

    pub async fn subscribe(&self, plan_id: i64) -> Result<UserSubscription, StoreError> {
        self.begin();
        let fallback = "Failed to subscribe to plan";
        let subscription: UserSubscription = self
            .api
            .post("/subscriptions", &SubscribeRequest { plan_id })
            .await
            .map_err(|err| self.fail(err, fallback))?;
        self.state_mut().current = Some(subscription.clone());
        self.refresh_user(fallback).await?;
        self.finish();
        Ok(subscription)
    }

    pub async fn upgrade_plan(&self, plan_id: i64) -> Result<UserSubscription, StoreError> {
        self.begin();
        let fallback = "Failed to upgrade subscription";
        let subscription: UserSubscription = self
            .api
            .put("/subscriptions/upgrade", &SubscribeRequest { plan_id })
            .await
            .map_err(|err| self.fail(err, fallback))?;
        self.state_mut().current = Some(subscription.clone());
        self.refresh_user(fallback).await?;
        self.finish();
        Ok(subscription)
    }

    pub async fn downgrade_plan(&self, plan_id: i64) -> Result<UserSubscription, StoreError> {
        self.begin();
        let fallback = "Failed to downgrade subscription";
        let subscription: UserSubscription = self
            .api
            .put("/subscriptions/downgrade", &SubscribeRequest { plan_id })
            .await
            .map_err(|err| self.fail(err, fallback))?;
        self.state_mut().current = Some(subscription.clone());
        self.refresh_user(fallback).await?;
        self.finish();
        Ok(subscription)
    }

    pub async fn cancel_subscription(&self) -> Result<UserSubscription, StoreError> {
        self.begin();
        let fallback = "Failed to cancel subscription";
        let subscription: UserSubscription = self
            .api
            .put("/subscriptions/cancel", &serde_json::json!({}))
            .await
            .map_err(|err| self.fail(err, fallback))?;
        self.state_mut().current = Some(subscription.clone());
        self.refresh_user(fallback).await?;
        self.finish();
        Ok(subscription)
    }

    pub async fn purchase_tokens(&self, amount: i64) -> Result<PurchaseTokensResponse, StoreError> {
        self.begin();
        let fallback = "Failed to purchase tokens";
        let receipt: PurchaseTokensResponse = self
            .api
            .post("/tokens/purchase", &PurchaseTokensRequest { amount })
            .await
            .map_err(|err| self.fail(err, fallback))?;
        self.refresh_user(fallback).await?;
        self.finish();
        Ok(receipt)
    }

    /// Cross-store consistency step after every mutation: the tier label and
    /// token balance cached on the session's user record are stale until the
    /// identity is re-fetched.
    async fn refresh_user(&self, fallback: &str) -> Result<(), StoreError> {
        self.session
            .fetch_user()
            .await
            .map(|_| ())
            .map_err(|err| self.fail(err, fallback))
    }
}
