use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::console_warn;
use crate::features::oauth::{begin_login, HandshakePhase, OAuthProvider};
use crate::services::navigation::NavigatorHandle;

#[derive(Props, PartialEq, Clone)]
pub struct SocialLoginButtonsProps {
    /// Called with a user-facing message when the redirect cannot be built
    pub on_error: EventHandler<String>,
}

#[component]
pub fn SocialLoginButtons(props: SocialLoginButtonsProps) -> Element {
    let services = use_context::<AuthServices>();
    let navigator = use_context::<NavigatorHandle>();
    let mut phase = use_signal(|| HandshakePhase::Idle);
    let redirecting = phase() == HandshakePhase::Redirecting;

    rsx! {
        div {
            class: "social-login",
            for provider in OAuthProvider::ALL {
                button {
                    key: "{provider}",
                    r#type: "button",
                    class: "social-button social-{provider}",
                    disabled: redirecting,
                    onclick: {
                        let services = services.clone();
                        let navigator = navigator.clone();
                        move |_| {
                            let result = begin_login(
                                provider,
                                &services.config,
                                navigator.as_navigator(),
                                &*services.events,
                            );
                            match result {
                                Ok(next) => phase.set(next),
                                Err(e) => {
                                    console_warn!("{} login unavailable: {}", provider.display_name(), e);
                                    phase.set(HandshakePhase::Idle);
                                    props.on_error.call(e.user_message());
                                }
                            }
                        }
                    },
                    "Login with {provider.display_name()}"
                }
            }
        }
    }
}
