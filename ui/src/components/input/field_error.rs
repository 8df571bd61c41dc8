use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    #[props(!optional)]
    pub message: Option<String>,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "field-error",
                role: "alert",
                style: "color: #ef4444; font-size: 0.875rem; margin-top: 4px;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
