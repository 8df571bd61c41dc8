//! OAuth redirect handshake
//!
//! `Idle → Redirecting → CallbackReceived → Exchanging → {Authenticated | Failed}`
//!
//! The outbound half builds the provider URL and navigates away. The return
//! half parses the callback query, makes exactly one code-exchange call to the
//! backend and navigates either to the dashboard or back to login carrying
//! "Authentication failed". Nothing is persisted unless the exchange succeeds.

use tracing::{info, warn};

use super::provider::{OAuthProvider, OAuthRequest};
use crate::services::client::{AuthApi, CodeExchangeRequest};
use crate::services::config::AuthConfig;
use crate::services::errors::{AuthError, AuthResult};
use crate::services::events::{AuthEvent, AuthEventHandler};
use crate::services::navigation::{Navigation, Navigator};
use crate::services::storage::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakePhase {
    Idle,
    Redirecting,
    CallbackReceived,
    Exchanging,
    Authenticated,
    Failed { message: String },
}

/// Navigate to the provider's authorization page
pub fn begin_login(
    provider: OAuthProvider,
    config: &AuthConfig,
    navigator: &dyn Navigator,
    events: &dyn AuthEventHandler,
) -> AuthResult<HandshakePhase> {
    let url = OAuthRequest::new(provider).authorization_url(config)?;

    info!("Redirecting to {} authorization", provider.display_name());
    events.handle_event(AuthEvent::OAuthRedirect {
        provider: provider.as_str().to_string(),
    });
    navigator.navigate(Navigation::External(url));
    Ok(HandshakePhase::Redirecting)
}

/// Query parameters the provider appends to the redirect URI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Parse a raw query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = non_empty(Some(value.as_ref()));
            match key.as_ref() {
                "code" => params.code = value,
                "state" => params.state = value,
                "error" => params.error = value,
                _ => {}
            }
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Collaborators the return half of the handshake needs
pub struct CallbackContext<'a> {
    pub api: &'a dyn AuthApi,
    pub navigator: &'a dyn Navigator,
    pub sessions: &'a dyn SessionStore,
    pub events: &'a dyn AuthEventHandler,
}

/// Run the return half of the handshake to a terminal phase.
///
/// `on_phase` sees every intermediate phase so a view can follow progress.
pub async fn complete_callback(
    ctx: &CallbackContext<'_>,
    provider_name: &str,
    params: CallbackParams,
    mut on_phase: impl FnMut(&HandshakePhase),
) -> HandshakePhase {
    on_phase(&HandshakePhase::CallbackReceived);

    let phase = match exchange(ctx, provider_name, params, &mut on_phase).await {
        Ok(()) => {
            ctx.navigator.navigate(Navigation::Dashboard);
            HandshakePhase::Authenticated
        }
        Err(e) => {
            warn!("OAuth callback for {} failed: {}", provider_name, e);
            let message = e.user_message();
            ctx.navigator
                .navigate(Navigation::login_with_error(message.clone()));
            HandshakePhase::Failed { message }
        }
    };

    on_phase(&phase);
    phase
}

async fn exchange(
    ctx: &CallbackContext<'_>,
    provider_name: &str,
    params: CallbackParams,
    on_phase: &mut impl FnMut(&HandshakePhase),
) -> AuthResult<()> {
    let provider: OAuthProvider = provider_name.parse()?;
    let name = provider.as_str().to_string();

    ctx.events.handle_event(AuthEvent::OAuthCallbackReceived {
        provider: name.clone(),
        has_code: params.code.is_some(),
    });

    if let Some(reason) = params.error {
        return Err(AuthError::MissingCode {
            provider: name,
            reason: Some(reason),
        });
    }
    let code = params.code.ok_or_else(|| AuthError::MissingCode {
        provider: name.clone(),
        reason: None,
    })?;

    if params.state.as_deref() != Some(provider.as_str()) {
        warn!("{} callback state mismatch: {:?}", name, params.state);
        ctx.events.handle_event(AuthEvent::OAuthStateMismatch {
            provider: name.clone(),
            received: params.state.clone(),
        });
    }

    on_phase(&HandshakePhase::Exchanging);
    let request = CodeExchangeRequest {
        code,
        state: params.state,
    };
    let session = match ctx.api.exchange_code(&name, &request).await {
        Ok(session) => session,
        Err(source) => {
            ctx.events.handle_event(AuthEvent::OAuthExchangeFailed {
                provider: name.clone(),
                error: source.to_string(),
            });
            return Err(AuthError::Exchange {
                provider: name,
                source,
            });
        }
    };

    ctx.sessions.save(&session)?;
    ctx.events
        .handle_event(AuthEvent::OAuthExchangeSucceeded { provider: name });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::auth_api::mock::MockAuthApi;
    use crate::services::config::OAuthClientIds;
    use crate::services::errors::AUTH_FAILED_MESSAGE;
    use crate::services::events::RecordingEventHandler;
    use crate::services::navigation::RecordingNavigator;
    use crate::services::storage::MemorySessionStore;

    struct Harness {
        api: MockAuthApi,
        navigator: RecordingNavigator,
        sessions: MemorySessionStore,
        events: RecordingEventHandler,
    }

    impl Harness {
        fn new(api: MockAuthApi) -> Self {
            Self {
                api,
                navigator: RecordingNavigator::new(),
                sessions: MemorySessionStore::new(),
                events: RecordingEventHandler::new(),
            }
        }

        async fn run(&self, provider: &str, query: &str) -> (HandshakePhase, Vec<HandshakePhase>) {
            let ctx = CallbackContext {
                api: &self.api,
                navigator: &self.navigator,
                sessions: &self.sessions,
                events: &self.events,
            };
            let mut seen = Vec::new();
            let phase = complete_callback(&ctx, provider, CallbackParams::from_query(query), |p| {
                seen.push(p.clone())
            })
            .await;
            (phase, seen)
        }
    }

    fn failed_login() -> Navigation {
        Navigation::login_with_error(AUTH_FAILED_MESSAGE)
    }

    #[test]
    fn test_from_query() {
        let params = CallbackParams::from_query("?code=4%2F0Ab&state=google&scope=email");
        assert_eq!(params.code.as_deref(), Some("4/0Ab"));
        assert_eq!(params.state.as_deref(), Some("google"));
        assert_eq!(params.error, None);

        let empty = CallbackParams::from_query("code=&state=google");
        assert_eq!(empty.code, None);
        assert_eq!(CallbackParams::from_query(""), CallbackParams::default());
    }

    #[tokio::test]
    async fn test_missing_code_navigates_to_login() {
        let harness = Harness::new(MockAuthApi::default());

        let (phase, _) = harness.run("google", "?state=google").await;

        assert_eq!(
            phase,
            HandshakePhase::Failed {
                message: AUTH_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(harness.navigator.history(), vec![failed_login()]);
        assert_eq!(
            harness.navigator.last().map(|n| n.path()),
            Some("/login".to_string())
        );
        assert!(harness.api.calls().is_empty());
        assert!(harness.sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_provider_error_is_treated_as_missing_code() {
        let harness = Harness::new(MockAuthApi::default());
        let (phase, _) = harness
            .run("linkedin", "?error=access_denied&state=linkedin")
            .await;

        assert!(matches!(phase, HandshakePhase::Failed { .. }));
        assert_eq!(harness.navigator.history(), vec![failed_login()]);
        assert!(harness.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let harness = Harness::new(MockAuthApi::default());

        let (phase, seen) = harness.run("google", "?code=abc&state=google").await;

        assert_eq!(phase, HandshakePhase::Authenticated);
        assert_eq!(
            seen,
            vec![
                HandshakePhase::CallbackReceived,
                HandshakePhase::Exchanging,
                HandshakePhase::Authenticated
            ]
        );
        assert_eq!(harness.api.calls(), vec!["exchange:google:abc".to_string()]);
        assert_eq!(harness.navigator.history(), vec![Navigation::Dashboard]);
        assert!(harness.sessions.load().is_some());
    }

    #[tokio::test]
    async fn test_failed_exchange_is_attempted_once() {
        let harness = Harness::new(MockAuthApi::failing());

        let (phase, _) = harness.run("linkedin", "?code=xyz&state=linkedin").await;

        assert!(matches!(phase, HandshakePhase::Failed { .. }));
        assert_eq!(harness.api.calls().len(), 1);
        assert_eq!(harness.navigator.history(), vec![failed_login()]);
        assert!(harness.sessions.load().is_none());
        assert!(harness
            .events
            .events()
            .iter()
            .any(|e| matches!(e, AuthEvent::OAuthExchangeFailed { .. })));
    }

    #[tokio::test]
    async fn test_state_mismatch_warns_but_continues() {
        let harness = Harness::new(MockAuthApi::default());

        let (phase, _) = harness.run("google", "?code=abc&state=linkedin").await;

        assert_eq!(phase, HandshakePhase::Authenticated);
        assert!(harness.events.events().contains(&AuthEvent::OAuthStateMismatch {
            provider: "google".to_string(),
            received: Some("linkedin".to_string()),
        }));
    }

    #[tokio::test]
    async fn test_unknown_provider_fails() {
        let harness = Harness::new(MockAuthApi::default());
        let (phase, _) = harness.run("github", "?code=abc&state=github").await;

        assert!(matches!(phase, HandshakePhase::Failed { .. }));
        assert!(harness.api.calls().is_empty());
        assert_eq!(harness.navigator.history(), vec![failed_login()]);
    }

    #[test]
    fn test_begin_login_navigates_externally() {
        let navigator = RecordingNavigator::new();
        let events = RecordingEventHandler::new();
        let config = AuthConfig {
            oauth: OAuthClientIds {
                google: Some("gid".to_string()),
                linkedin: None,
            },
            ..AuthConfig::default()
        };

        let phase = begin_login(OAuthProvider::Google, &config, &navigator, &events).unwrap();
        assert_eq!(phase, HandshakePhase::Redirecting);
        match navigator.last() {
            Some(Navigation::External(url)) => {
                assert_eq!(url.host_str(), Some("accounts.google.com"))
            }
            other => panic!("unexpected navigation: {:?}", other),
        }

        assert!(begin_login(OAuthProvider::LinkedIn, &config, &navigator, &events).is_err());
        assert_eq!(navigator.history().len(), 1);
    }
}
