use std::collections::BTreeMap;

/// Named routes exposed by the application shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    // Public pages
    Home,
    Pricing,
    // Auth entry pages
    Login,
    Register,
    ForgotPassword,
    // Dashboard
    Dashboard,
    Settings,
    // Accounts
    Accounts,
    AddAccount,
    AccountDetail,
    // Analytics
    Followers,
    Interactions,
    Posts,
    Statistics,
    WordAnalysis,
    // Giveaways
    Giveaways,
    CreateGiveaway,
    GiveawayDetail,
    // Bluesky specific
    Lists,
    Blocking,
    // Subscription
    Subscription,
    SubscriptionPlans,
    Tokens,
}

/// Layout group a route is mounted under. Dashboard routes require an
/// authenticated session; the other two groups are open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Default,
    Auth,
    Dashboard,
}

/// One entry of the declarative route table.
#[derive(Debug)]
pub struct RouteDef {
    pub name: RouteName,
    /// Path pattern; `:id` marks the account/giveaway parameter.
    pub path: &'static str,
    pub layout: Layout,
    pub requires_auth: bool,
    /// Gated on the target account being a Bluesky account.
    pub bluesky_only: bool,
}

const fn public(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        layout: Layout::Default,
        requires_auth: false,
        bluesky_only: false,
    }
}

const fn auth_entry(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        layout: Layout::Auth,
        requires_auth: false,
        bluesky_only: false,
    }
}

const fn dashboard(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        layout: Layout::Dashboard,
        requires_auth: true,
        bluesky_only: false,
    }
}

const fn bluesky(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        layout: Layout::Dashboard,
        requires_auth: true,
        bluesky_only: true,
    }
}

/// The full routing surface, flattened from the three layout groups.
pub static ROUTES: &[RouteDef] = &[
    public(RouteName::Home, "/"),
    public(RouteName::Pricing, "/pricing"),
    auth_entry(RouteName::Login, "/auth/login"),
    auth_entry(RouteName::Register, "/auth/register"),
    auth_entry(RouteName::ForgotPassword, "/auth/forgot-password"),
    dashboard(RouteName::Dashboard, "/dashboard"),
    dashboard(RouteName::Settings, "/dashboard/settings"),
    dashboard(RouteName::Accounts, "/dashboard/accounts"),
    dashboard(RouteName::AddAccount, "/dashboard/accounts/add"),
    dashboard(RouteName::AccountDetail, "/dashboard/accounts/:id"),
    dashboard(RouteName::Followers, "/dashboard/accounts/:id/followers"),
    dashboard(RouteName::Interactions, "/dashboard/accounts/:id/interactions"),
    dashboard(RouteName::Posts, "/dashboard/accounts/:id/posts"),
    dashboard(RouteName::Statistics, "/dashboard/accounts/:id/statistics"),
    dashboard(RouteName::WordAnalysis, "/dashboard/accounts/:id/word-analysis"),
    dashboard(RouteName::Giveaways, "/dashboard/giveaways"),
    dashboard(RouteName::CreateGiveaway, "/dashboard/giveaways/create"),
    dashboard(RouteName::GiveawayDetail, "/dashboard/giveaways/:id"),
    bluesky(RouteName::Lists, "/dashboard/accounts/:id/lists"),
    bluesky(RouteName::Blocking, "/dashboard/accounts/:id/blocking"),
    dashboard(RouteName::Subscription, "/dashboard/subscription"),
    dashboard(RouteName::SubscriptionPlans, "/dashboard/subscription/plans"),
    dashboard(RouteName::Tokens, "/dashboard/tokens"),
];

/// Looks up the table entry for a named route.
pub fn route(name: RouteName) -> &'static RouteDef {
    ROUTES
        .iter()
        .find(|def| def.name == name)
        .expect("route table covers every RouteName")
}

/// Destination of a navigation: a named route plus its parameters and query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTarget {
    pub name: RouteName,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
}

impl RouteTarget {
    pub fn named(name: RouteName) -> Self {
        RouteTarget {
            name,
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }
}

/// A concrete matched location, as handed to the navigation guard: the
/// route's name, its resolved parameters, and the full requested path
/// (used verbatim as the post-login redirect).
#[derive(Clone, Debug)]
pub struct RouteLocation {
    pub name: RouteName,
    pub params: BTreeMap<String, String>,
    full_path: String,
}

impl RouteLocation {
    pub fn new(name: RouteName) -> Self {
        RouteLocation {
            name,
            params: BTreeMap::new(),
            full_path: route(name).path.to_string(),
        }
    }

    /// Resolves a path parameter, substituting it into the full path.
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.full_path = self.full_path.replace(&format!(":{key}"), value);
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Appends a query pair to the full path.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        let separator = if self.full_path.contains('?') { '&' } else { '?' };
        self.full_path = format!("{}{}{}={}", self.full_path, separator, key, value);
        self
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_routes_require_auth() {
        for def in ROUTES {
            match def.layout {
                Layout::Dashboard => assert!(def.requires_auth, "{:?}", def.name),
                Layout::Default | Layout::Auth => {
                    assert!(!def.requires_auth, "{:?}", def.name)
                }
            }
        }
    }

    #[test]
    fn only_lists_and_blocking_are_bluesky_only() {
        let gated: Vec<RouteName> = ROUTES
            .iter()
            .filter(|def| def.bluesky_only)
            .map(|def| def.name)
            .collect();
        assert_eq!(gated, vec![RouteName::Lists, RouteName::Blocking]);
    }

    #[test]
    fn location_substitutes_params_into_full_path() {
        let to = RouteLocation::new(RouteName::Lists).with_param("id", "12");
        assert_eq!(to.full_path(), "/dashboard/accounts/12/lists");
        assert_eq!(to.params.get("id").map(String::as_str), Some("12"));
    }

    #[test]
    fn location_appends_query_pairs() {
        let to = RouteLocation::new(RouteName::Login)
            .with_query("redirect", "/dashboard")
            .with_query("from", "guard");
        assert_eq!(to.full_path(), "/auth/login?redirect=/dashboard&from=guard");
    }

    #[test]
    fn every_name_resolves_in_the_table() {
        for def in ROUTES {
            assert_eq!(route(def.name).path, def.path);
        }
    }
}
