use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::services::config::{missing_client_id, AuthConfig};
use crate::services::errors::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    LinkedIn,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::LinkedIn];

    /// Route segment and backend path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::LinkedIn => "linkedin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::LinkedIn => "LinkedIn",
        }
    }

    pub fn authorize_endpoint(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
            OAuthProvider::LinkedIn => "https://www.linkedin.com/oauth/v2/authorization",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AuthError::UnknownProvider {
                name: name.to_string(),
            })
    }
}

/// Authorization request sent to the provider.
///
/// `state` is the provider name: an echo marker checked on return, not a
/// random CSRF nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    pub provider: OAuthProvider,
    pub state: String,
}

impl OAuthRequest {
    pub fn new(provider: OAuthProvider) -> Self {
        Self {
            provider,
            state: provider.as_str().to_string(),
        }
    }

    pub fn authorization_url(&self, config: &AuthConfig) -> AuthResult<Url> {
        let client_id = config
            .client_id(self.provider)
            .ok_or_else(|| missing_client_id(self.provider))?;
        let redirect_uri = config.redirect_uri(self.provider);

        Url::parse_with_params(
            self.provider.authorize_endpoint(),
            &[
                ("response_type", "code"),
                ("client_id", client_id),
                ("redirect_uri", redirect_uri.as_str()),
                ("scope", config.oauth_scope.as_str()),
                ("state", self.state.as_str()),
            ],
        )
        .map_err(|e| AuthError::Configuration {
            field: "authorize_endpoint".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::OAuthClientIds;
    use std::collections::HashMap;

    fn config() -> AuthConfig {
        AuthConfig {
            oauth: OAuthClientIds {
                google: Some("google-client".to_string()),
                linkedin: Some("linkedin-client".to_string()),
            },
            app_base_url: "https://app.example.com".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("google".parse::<OAuthProvider>().unwrap(), OAuthProvider::Google);
        assert_eq!("LinkedIn".parse::<OAuthProvider>().unwrap(), OAuthProvider::LinkedIn);
        assert_eq!(
            "github".parse::<OAuthProvider>().unwrap_err(),
            AuthError::UnknownProvider {
                name: "github".to_string()
            }
        );
    }

    #[test]
    fn test_google_authorization_url() {
        let url = OAuthRequest::new(OAuthProvider::Google)
            .authorization_url(&config())
            .unwrap();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        assert_eq!(url.path(), "/o/oauth2/v2/auth");

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "google-client");
        assert_eq!(
            params["redirect_uri"],
            "https://app.example.com/callback/google"
        );
        assert_eq!(params["scope"], "openid profile email");
        assert_eq!(params["state"], "google");
    }

    #[test]
    fn test_linkedin_authorization_url() {
        let url = OAuthRequest::new(OAuthProvider::LinkedIn)
            .authorization_url(&config())
            .unwrap();
        assert!(url
            .as_str()
            .starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
        assert!(url.query_pairs().any(|(k, v)| k == "state" && v == "linkedin"));
    }

    #[test]
    fn test_missing_client_id() {
        let mut config = config();
        config.oauth.google = None;
        let err = OAuthRequest::new(OAuthProvider::Google)
            .authorization_url(&config)
            .unwrap_err();
        assert_eq!(err.user_message(), "Google login is not configured");
    }
}
