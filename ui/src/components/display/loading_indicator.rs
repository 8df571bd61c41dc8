use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    /// Render inline next to a control instead of as a block
    #[props(default)]
    pub inline: bool,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    let class = if props.inline {
        "loading-indicator inline"
    } else {
        "loading-indicator"
    };

    rsx! {
        span {
            class: class,
            role: "status",
            "aria-live": "polite",
            "⏳ {props.message}"
        }
    }
}
