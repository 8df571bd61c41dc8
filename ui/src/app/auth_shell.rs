use dioxus::prelude::*;

use super::AuthServices;
use crate::components::display::ErrorFallback;
use crate::console_error;
use crate::services::config::AuthConfig;
use crate::services::events::AuthEvent;
use crate::services::navigation::NavigatorHandle;

#[derive(Props, PartialEq, Clone)]
pub struct AuthShellProps {
    pub navigator: NavigatorHandle,
    pub children: Element,
}

/// Provides [`AuthServices`] and the navigator to every view below it, and
/// contains render failures in a fallback view
#[component]
pub fn AuthShell(props: AuthShellProps) -> Element {
    let navigator = props.navigator.clone();
    use_hook(move || provide_context(navigator));

    let services = use_hook(|| {
        let built = AuthServices::from_config(AuthConfig::from_build_env());
        match &built {
            Ok(services) => {
                provide_context(services.clone());
            }
            Err(e) => console_error!("Failed to initialise services: {}", e),
        }
        built.map_err(|e| e.user_message())
    });

    let events = match services {
        Ok(services) => services.events,
        Err(message) => {
            return rsx! {
                ErrorFallback { message }
            };
        }
    };

    rsx! {
        div {
            class: "auth-container",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let message = errors
                        .errors()
                        .first()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "Unexpected error".to_string());
                    console_error!("Render fault: {}", message);
                    events.handle_event(AuthEvent::RenderFault {
                        message: message.clone(),
                    });
                    rsx! {
                        ErrorFallback { message }
                    }
                },
                {props.children}
            }
        }
    }
}
