use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::console_info;
use crate::services::events::AuthEvent;
use crate::services::navigation::{Navigation, NavigatorHandle};

/// Landing view after a successful login or OAuth exchange
#[component]
pub fn AuthenticatedView() -> Element {
    let services = use_context::<AuthServices>();
    let navigator = use_context::<NavigatorHandle>();
    let has_session = services.sessions.load().is_some();

    let sign_out = move |_: MouseEvent| {
        services.sessions.clear();
        services.events.handle_event(AuthEvent::SignedOut);
        console_info!("Session cleared");
        navigator.navigate(Navigation::Login { error: None });
    };

    rsx! {
        div {
            class: "auth-card dashboard",
            h2 { class: "form-title", "Dashboard" }
            if has_session {
                p { "You are signed in." }
            } else {
                p { "No active session found." }
            }
            button {
                class: "secondary-button",
                onclick: sign_out,
                "Sign out"
            }
        }
    }
}
