use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorFallbackProps {
    pub message: String,
}

/// Shown in place of a subtree that failed to render
#[component]
pub fn ErrorFallback(props: ErrorFallbackProps) -> Element {
    rsx! {
        div {
            class: "error-fallback",
            role: "alert",
            h2 { "Something went wrong" }
            p { "{props.message}" }
            a {
                class: "error-fallback-link",
                href: "/login",
                "Back to login"
            }
        }
    }
}
