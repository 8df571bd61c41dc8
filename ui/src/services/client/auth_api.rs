use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, instrument};

use super::errors::ClientResult;
use super::http::{build_http_client, post_json, with_timeout};
use super::types::{CodeExchangeRequest, LoginRequest, RegistrationRequest, SessionPayload};
use crate::services::config::AuthConfig;

/// Backend authentication endpoints
#[async_trait(?Send)] // Browser futures are not Send
pub trait AuthApi {
    /// Exchange an OAuth authorization code for a session
    async fn exchange_code(
        &self,
        provider: &str,
        request: &CodeExchangeRequest,
    ) -> ClientResult<SessionPayload>;

    /// Email/password login
    async fn login(&self, request: &LoginRequest) -> ClientResult<SessionPayload>;

    /// Account registration
    async fn register(&self, request: &RegistrationRequest) -> ClientResult<serde_json::Value>;
}

/// [`AuthApi`] over HTTP against the configured backend
#[derive(Clone)]
pub struct HttpAuthApi {
    http_client: Client,
    config: AuthConfig,
}

impl HttpAuthApi {
    pub fn new(config: AuthConfig) -> ClientResult<Self> {
        Ok(Self {
            http_client: build_http_client()?,
            config,
        })
    }

    fn timeout(&self) -> Duration {
        self.config.request_timeout()
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    #[instrument(skip(self, request), err)]
    async fn exchange_code(
        &self,
        provider: &str,
        request: &CodeExchangeRequest,
    ) -> ClientResult<SessionPayload> {
        let url = self
            .config
            .api_url(&format!("/api/auth/{}/callback", provider));
        info!("Exchanging authorization code for {} via {}", provider, url);

        let body = with_timeout(
            "oauth code exchange",
            self.timeout(),
            post_json(&self.http_client, &url, request),
        )
        .await
        .inspect_err(|e| error!("Code exchange for {} failed: {}", provider, e))?;

        Ok(SessionPayload(body))
    }

    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn login(&self, request: &LoginRequest) -> ClientResult<SessionPayload> {
        let url = self.config.api_url("/api/auth/login");
        let body = with_timeout(
            "login",
            self.timeout(),
            post_json(&self.http_client, &url, request),
        )
        .await?;
        Ok(SessionPayload(body))
    }

    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn register(&self, request: &RegistrationRequest) -> ClientResult<serde_json::Value> {
        let url = self.config.api_url("/api/auth/register");
        with_timeout(
            "registration",
            self.timeout(),
            post_json(&self.http_client, &url, request),
        )
        .await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use crate::services::client::ClientError;
    use std::cell::RefCell;

    /// Scripted [`AuthApi`] that records the calls it receives
    pub(crate) struct MockAuthApi {
        pub exchange: ClientResult<SessionPayload>,
        pub login: ClientResult<SessionPayload>,
        pub register: ClientResult<serde_json::Value>,
        pub calls: RefCell<Vec<String>>,
    }

    impl Default for MockAuthApi {
        fn default() -> Self {
            Self {
                exchange: Ok(SessionPayload(serde_json::json!({ "token": "oauth-token" }))),
                login: Ok(SessionPayload(serde_json::json!({ "token": "password-token" }))),
                register: Ok(serde_json::json!({ "id": 1 })),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MockAuthApi {
        pub fn failing() -> Self {
            let error = ClientError::HttpStatus {
                status: 401,
                body: "unauthorized".to_string(),
            };
            Self {
                exchange: Err(error.clone()),
                login: Err(error.clone()),
                register: Err(error),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for MockAuthApi {
        async fn exchange_code(
            &self,
            provider: &str,
            request: &CodeExchangeRequest,
        ) -> ClientResult<SessionPayload> {
            self.calls
                .borrow_mut()
                .push(format!("exchange:{}:{}", provider, request.code));
            self.exchange.clone()
        }

        async fn login(&self, request: &LoginRequest) -> ClientResult<SessionPayload> {
            self.calls.borrow_mut().push(format!("login:{}", request.email));
            self.login.clone()
        }

        async fn register(&self, request: &RegistrationRequest) -> ClientResult<serde_json::Value> {
            self.calls
                .borrow_mut()
                .push(format!("register:{}", request.email));
            self.register.clone()
        }
    }
}
