use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::common::error::Res;
use crate::router::routes::{self, RouteLocation, RouteName, RouteTarget};
use crate::stores::session::SessionStore;

/// Session-state view the guard decides from: the synchronous
/// authentication flag and the asynchronous Bluesky capability check.
#[async_trait]
pub trait RouteGate: Send + Sync {
    fn is_authenticated(&self) -> bool;
    async fn is_bluesky_account(&self, account_id: &str) -> Res<bool>;
}

#[async_trait]
impl RouteGate for SessionStore {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }

    /// Infallible by construction: the store collapses check failures to
    /// `false` (fail-closed).
    async fn is_bluesky_account(&self, account_id: &str) -> Res<bool> {
        Ok(self.check_is_bluesky_account(account_id).await)
    }
}

/// Outcome of a guard decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteTarget),
}

/// Decides every route transition, fresh each time:
///
/// 1. Target requires authentication and the session is not authenticated:
///    redirect to login carrying the intended path for post-login redirect.
/// 2. Target is Bluesky-only: run the capability check; allow on true,
///    redirect to the account detail page on false, to the accounts list if
///    the check itself fails.
/// 3. Otherwise allow.
///
/// Authentication is checked strictly first, so an unauthenticated session
/// never triggers the capability-check network call.
pub struct NavigationGuard<G: RouteGate> {
    gate: Arc<G>,
}

impl<G: RouteGate> NavigationGuard<G> {
    pub fn new(gate: Arc<G>) -> Self {
        NavigationGuard { gate }
    }

    pub async fn before_each(&self, to: &RouteLocation) -> GuardDecision {
        let def = routes::route(to.name);

        if def.requires_auth && !self.gate.is_authenticated() {
            return GuardDecision::Redirect(
                RouteTarget::named(RouteName::Login).with_query("redirect", to.full_path()),
            );
        }

        if def.bluesky_only {
            let account_id = to.params.get("id").cloned().unwrap_or_default();
            return match self.gate.is_bluesky_account(&account_id).await {
                Ok(true) => GuardDecision::Allow,
                Ok(false) => GuardDecision::Redirect(
                    RouteTarget::named(RouteName::AccountDetail).with_param("id", &account_id),
                ),
                Err(err) => {
                    warn!("Capability check failed for account {account_id}: {err}");
                    GuardDecision::Redirect(RouteTarget::named(RouteName::Accounts))
                }
            };
        }

        GuardDecision::Allow
    }
}
