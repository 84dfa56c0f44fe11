use std::sync::{Arc, RwLock};

use log::warn;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::error::{ApiError, Res};
use crate::common::nav::Navigator;
use crate::common::storage::{KeyValueStorage, TOKEN_KEY};
use crate::router::routes::{RouteName, RouteTarget};

/// HTTP client adapter for the SocialSync REST API.
///
/// Attaches the current credential as a bearer token on every outgoing
/// request and intercepts responses once, centrally: a 401 tears the session
/// down (persisted credential removed, forced navigation to login); a 403
/// whose backend message mentions a subscription restriction forces
/// navigation to the plan selection page. All other errors propagate
/// unchanged to the calling store.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    storage: Arc<dyn KeyValueStorage>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Builds the adapter, seeding the outgoing credential from persistent
    /// storage.
    pub fn new(
        base_url: &str,
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let token = storage.get(TOKEN_KEY);
        ApiClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(token),
            storage,
            navigator,
        }
    }

    /// Sets the default outgoing credential.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Removes the default outgoing credential.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Res<T> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Res<T> {
        self.send(self.http.get(self.url(path)).query(params)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Res<T> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Res<T> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// DELETE discards any response body; the backend answers 2xx or an
    /// error envelope.
    pub async fn delete(&self, path: &str) -> Res<()> {
        let request = self.attach_credential(self.http.delete(self.url(path)));
        let response = request.send().await?;
        self.intercept(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn attach_credential(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Res<T> {
        let response = self.attach_credential(request).send().await?;
        let response = self.intercept(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Central response interceptor: classifies error responses and applies
    /// the cross-cutting 401/403 reactions so individual call sites never
    /// special-case these statuses.
    async fn intercept(&self, response: Response) -> Res<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));
        let message = body["message"].as_str().unwrap_or("").to_string();

        match status {
            StatusCode::UNAUTHORIZED => {
                // Unrecoverable locally: drop the persisted credential and
                // send the whole application back to the login entry point.
                warn!("Unauthorized response, tearing down session");
                self.storage.remove(TOKEN_KEY);
                self.navigator.navigate(RouteTarget::named(RouteName::Login));
                let message = if message.is_empty() {
                    "Unauthorized".to_string()
                } else {
                    message
                };
                Err(ApiError::Auth(message))
            }
            StatusCode::FORBIDDEN if message.contains("subscription") => {
                // Textual contract with the backend wording, kept as-is.
                warn!("Subscription-restricted response: {message}");
                self.navigator
                    .navigate(RouteTarget::named(RouteName::SubscriptionPlans));
                Err(ApiError::Http {
                    status: status.as_u16(),
                    message,
                })
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let message = if message.is_empty() {
                    "Invalid input".to_string()
                } else {
                    message
                };
                Err(ApiError::Validation(message))
            }
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                message,
            }),
        }
    }
}
