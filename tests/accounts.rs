mod support;

use serde_json::json;
use socialsync_client::AccountStore;
use socialsync_client::api::models::account::Platform;
use support::{Harness, account_json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_accounts_populates_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            account_json(5, "bluesky"),
            account_json(7, "mastodon")
        ])))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());

    let accounts = store.fetch_accounts().await.expect("fetch accounts");
    assert_eq!(accounts.len(), 2);
    assert_eq!(store.account_count(), 2);
    assert!(!store.loading());
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn removing_the_selected_account_clears_the_current_reference() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            account_json(5, "bluesky"),
            account_json(7, "mastodon")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_json(5, "bluesky")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());
    store.fetch_accounts().await.expect("fetch accounts");
    store.fetch_account(5).await.expect("fetch account");
    assert_eq!(store.current_account().map(|a| a.id), Some(5));

    store.remove_account(5).await.expect("remove account");

    let remaining: Vec<i64> = store.accounts().iter().map(|a| a.id).collect();
    assert_eq!(remaining, vec![7]);
    assert!(store.current_account().is_none());
}

#[tokio::test]
async fn removing_another_account_leaves_the_current_reference_alone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            account_json(5, "bluesky"),
            account_json(7, "mastodon")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_json(5, "bluesky")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());
    store.fetch_accounts().await.expect("fetch accounts");
    store.fetch_account(5).await.expect("fetch account");

    store.remove_account(7).await.expect("remove account");

    assert_eq!(store.current_account().map(|a| a.id), Some(5));
    assert_eq!(store.account_count(), 1);
}

#[tokio::test]
async fn add_account_appends_to_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_json(json!({
            "platform": "bluesky",
            "username": "ada.bsky.social",
            "token": "app-password"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(account_json(9, "bluesky")))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());

    let account = store
        .add_account(Platform::Bluesky, "ada.bsky.social", "app-password")
        .await
        .expect("add account");

    assert_eq!(account.id, 9);
    assert_eq!(store.accounts().last().map(|a| a.id), Some(9));
}

#[tokio::test]
async fn refresh_replaces_the_account_in_collection_and_selection() {
    let server = MockServer::start().await;

    let mut refreshed = account_json(5, "bluesky");
    refreshed["follower_count"] = json!(999);

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([account_json(5, "bluesky")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/accounts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_json(5, "bluesky")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts/5/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());
    store.fetch_accounts().await.expect("fetch accounts");
    store.fetch_account(5).await.expect("fetch account");

    let account = store.refresh_account_data(5).await.expect("refresh");

    assert_eq!(account.follower_count, 999);
    assert_eq!(store.accounts()[0].follower_count, 999);
    assert_eq!(store.current_account().map(|a| a.follower_count), Some(999));
}

#[tokio::test]
async fn failures_surface_the_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());

    let err = store.fetch_accounts().await.expect_err("should fail");
    assert_eq!(err.0, "database offline");
    assert_eq!(store.error(), Some("database offline".to_string()));
    assert!(!store.loading());
}

#[tokio::test]
async fn failures_without_a_backend_message_use_the_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let harness = Harness::with_token(&server.uri(), "abc");
    let store = AccountStore::new(harness.api.clone());

    let err = store.fetch_accounts().await.expect_err("should fail");
    assert_eq!(err.0, "Failed to fetch accounts");
    assert_eq!(store.error(), Some("Failed to fetch accounts".to_string()));
}
