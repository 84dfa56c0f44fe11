use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration for the client library.
///
/// Holds the parameters an embedding application needs to construct the
/// HTTP client adapter and the session store: the backend base URL, whether
/// console logging is enabled, and the locale to fall back to before a
/// persisted preference or a user record provides one.
pub struct Config {
    /// Base URL of the SocialSync REST API.
    pub api_base_url: String,
    /// Whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Locale used when neither storage nor the user record carries one.
    pub default_language: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// All variables are optional:
    /// - `API_URL`: Base URL of the backend API (default: "/api")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `DEFAULT_LANGUAGE`: Fallback locale (default: "en")
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            api_base_url: env::var("API_URL").unwrap_or_else(|_| "/api".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            default_language: env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        })
    }
}
