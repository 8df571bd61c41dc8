use dioxus::prelude::*;

use crate::components::input::FieldError;
use crate::features::auth::{Gender, Hobby};

#[derive(Props, PartialEq, Clone)]
pub struct GenderGroupProps {
    #[props(!optional)]
    pub selected: Option<Gender>,
    #[props(!optional)]
    pub error: Option<String>,
    pub on_select: EventHandler<Gender>,
}

#[component]
pub fn GenderGroup(props: GenderGroupProps) -> Element {
    rsx! {
        fieldset {
            class: "choice-group",
            legend { class: "input-label", "Gender" }
            for gender in Gender::ALL {
                label {
                    key: "{gender.as_str()}",
                    class: "choice-option",
                    input {
                        r#type: "radio",
                        name: "gender",
                        value: gender.as_str(),
                        checked: props.selected == Some(gender),
                        onchange: move |_| props.on_select.call(gender)
                    }
                    "{gender.label()}"
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct HobbyGroupProps {
    pub selected: Vec<Hobby>,
    #[props(!optional)]
    pub error: Option<String>,
    pub on_toggle: EventHandler<Hobby>,
}

#[component]
pub fn HobbyGroup(props: HobbyGroupProps) -> Element {
    rsx! {
        fieldset {
            class: "choice-group",
            legend { class: "input-label", "Hobbies" }
            for hobby in Hobby::ALL {
                label {
                    key: "{hobby.as_str()}",
                    class: "choice-option",
                    input {
                        r#type: "checkbox",
                        name: "hobbies",
                        value: hobby.as_str(),
                        checked: props.selected.contains(&hobby),
                        onchange: move |_| props.on_toggle.call(hobby)
                    }
                    "{hobby.label()}"
                }
            }
            FieldError { message: props.error.clone() }
        }
    }
}
