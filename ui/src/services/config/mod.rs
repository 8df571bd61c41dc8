//! Application configuration
//!
//! Values are baked in at build time from environment variables, mirroring the
//! way bundlers inject `VITE_*` style settings into browser builds:
//!
//! - `GOOGLE_CLIENT_ID` / `LINKEDIN_CLIENT_ID`: OAuth client identifiers
//! - `APP_BASE_URL`: origin used for OAuth redirect URIs (defaults to the page origin)
//! - `API_BASE_URL`: origin of the backend (defaults to `APP_BASE_URL`)

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::features::oauth::OAuthProvider;
use crate::services::errors::AuthError;

pub const DEFAULT_APP_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,cca2";
pub const DEFAULT_OAUTH_SCOPE: &str = "openid profile email";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub oauth: OAuthClientIds,
    /// Origin of this application, used to build `/callback/<provider>` redirect URIs
    pub app_base_url: String,
    /// Origin of the backend serving `/api/auth/*`
    pub api_base_url: String,
    pub countries_endpoint: String,
    pub oauth_scope: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthClientIds {
    pub google: Option<String>,
    pub linkedin: Option<String>,
}

impl OAuthClientIds {
    pub fn get(&self, provider: OAuthProvider) -> Option<&str> {
        let id = match provider {
            OAuthProvider::Google => self.google.as_deref(),
            OAuthProvider::LinkedIn => self.linkedin.as_deref(),
        };
        id.filter(|id| !id.trim().is_empty())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            oauth: OAuthClientIds::default(),
            app_base_url: DEFAULT_APP_BASE_URL.to_string(),
            api_base_url: DEFAULT_APP_BASE_URL.to_string(),
            countries_endpoint: DEFAULT_COUNTRIES_ENDPOINT.to_string(),
            oauth_scope: DEFAULT_OAUTH_SCOPE.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl AuthConfig {
    /// Configuration from build-time environment, falling back to the page origin
    pub fn from_build_env() -> Self {
        let app_base_url = option_env!("APP_BASE_URL")
            .map(str::to_string)
            .or_else(crate::services::navigation::current_origin)
            .unwrap_or_else(|| DEFAULT_APP_BASE_URL.to_string());
        let api_base_url = option_env!("API_BASE_URL")
            .map(str::to_string)
            .unwrap_or_else(|| app_base_url.clone());

        Self {
            oauth: OAuthClientIds {
                google: option_env!("GOOGLE_CLIENT_ID").map(str::to_string),
                linkedin: option_env!("LINKEDIN_CLIENT_ID").map(str::to_string),
            },
            app_base_url: trim_base(&app_base_url),
            api_base_url: trim_base(&api_base_url),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn client_id(&self, provider: OAuthProvider) -> Option<&str> {
        self.oauth.get(provider)
    }

    /// Redirect URI registered with the provider for this application
    pub fn redirect_uri(&self, provider: OAuthProvider) -> String {
        format!(
            "{}/callback/{}",
            trim_base(&self.app_base_url),
            provider.as_str()
        )
    }

    /// Absolute backend URL for an `/api/...` path
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            trim_base(&self.api_base_url),
            path.trim_start_matches('/')
        )
    }

    /// Check the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<AuthError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("app_base_url", &self.app_base_url),
            ("api_base_url", &self.api_base_url),
            ("countries_endpoint", &self.countries_endpoint),
        ] {
            if let Err(e) = url::Url::parse(value) {
                errors.push(AuthError::Configuration {
                    field: field.to_string(),
                    message: format!("'{}' is not a valid URL: {}", value, e),
                });
            }
        }

        if self.request_timeout_ms == 0 {
            errors.push(AuthError::Configuration {
                field: "request_timeout_ms".to_string(),
                message: "Request timeout must be greater than zero".to_string(),
            });
        }

        for provider in OAuthProvider::ALL {
            if self.client_id(provider).is_none() {
                errors.push(missing_client_id(provider));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn missing_client_id(provider: OAuthProvider) -> AuthError {
    AuthError::Configuration {
        field: format!("{}_client_id", provider.as_str()),
        message: format!("{} login is not configured", provider.display_name()),
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
