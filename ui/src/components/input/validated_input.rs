use dioxus::prelude::*;

use super::FieldError;
use crate::utils::{field_class, field_style};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(!optional)]
    pub error: Option<String>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Labelled input with its field error underneath
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let has_error = props.error.is_some();

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: field_class(has_error),
                style: field_style(has_error),
                r#type: props.input_type.as_str(),
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
            FieldError { message: props.error.clone() }
        }
    }
}
