use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::components::display::{LoadingIndicator, NoticeBanner};
use crate::features::notice::Notice;
use crate::features::oauth::{complete_callback, CallbackContext, CallbackParams, HandshakePhase, OAuthProvider};
use crate::services::navigation::{current_query, NavigatorHandle};

#[derive(Props, PartialEq, Clone)]
pub struct OAuthCallbackProps {
    /// Route segment, e.g. `google`
    pub provider: String,
}

/// Landing view for `/callback/<provider>`; runs the code exchange exactly once
#[component]
pub fn OAuthCallback(props: OAuthCallbackProps) -> Element {
    let services = use_context::<AuthServices>();
    let navigator = use_context::<NavigatorHandle>();
    let mut phase = use_signal(|| HandshakePhase::CallbackReceived);

    let provider_name = props.provider.clone();
    use_hook(move || {
        let params = CallbackParams::from_query(&current_query());
        spawn(async move {
            let ctx = CallbackContext {
                api: &*services.api,
                navigator: navigator.as_navigator(),
                sessions: &*services.sessions,
                events: &*services.events,
            };
            complete_callback(&ctx, &provider_name, params, |p| phase.set(p.clone())).await;
        })
    });

    let label = props
        .provider
        .parse::<OAuthProvider>()
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|_| props.provider.clone());

    rsx! {
        div {
            class: "auth-card callback",
            match phase() {
                HandshakePhase::Failed { message } => rsx! {
                    NoticeBanner { notice: Some(Notice::error(message)) }
                },
                HandshakePhase::Authenticated => rsx! {
                    p { "Signed in with {label}. Redirecting..." }
                },
                _ => rsx! {
                    LoadingIndicator { message: format!("Processing {} login...", label) }
                },
            }
        }
    }
}
