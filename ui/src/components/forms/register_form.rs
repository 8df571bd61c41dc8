use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::components::display::NoticeBanner;
use crate::components::forms::{GenderGroup, HobbyGroup, LocationSelector};
use crate::components::input::{FieldError, InputType, ValidatedInput};
use crate::features::auth::submission::REGISTRATION_SUCCESS_MESSAGE;
use crate::features::auth::{
    complete_registration, report_invalid, Field, Gender, Hobby, RegistrationAction,
    RegistrationForm, SelectedFile, Submission,
};
use crate::features::location::LocationCascade;
use crate::services::events::FormKind;
use crate::services::navigation::{Navigation, NavigatorHandle};
use crate::utils::{field_class, field_error};

/// Metadata of the files chosen in a file input
async fn selected_files(evt: &FormEvent) -> Vec<SelectedFile> {
    let Some(engine) = evt.files() else {
        return Vec::new();
    };
    let mut files = Vec::new();
    for name in engine.files() {
        let size = engine.file_size(&name).await;
        files.push(SelectedFile { name, size });
    }
    files
}

#[component]
pub fn RegisterPage() -> Element {
    let services = use_context::<AuthServices>();
    let navigator = use_context::<NavigatorHandle>();

    let mut form = use_signal(RegistrationForm::default);
    let mut cascade = use_signal(LocationCascade::new);
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        form.with_mut(|f| f.reduce_in_place(action));
    });

    let on_submit = move |_: MouseEvent| {
        let request = {
            let location = cascade.read();
            form.with_mut(|f| f.submit(&location))
        };
        let request = match request {
            Submission::Ready(request) => request,
            Submission::Invalid => {
                report_invalid(&*services.events, FormKind::Registration, &form.read().errors);
                return;
            }
            Submission::InFlight => return,
        };

        let services = services.clone();
        spawn(async move {
            match complete_registration(&*services.api, &*services.events, request).await {
                Ok(()) => {
                    dispatch.call(RegistrationAction::SubmitSucceeded(
                        REGISTRATION_SUCCESS_MESSAGE.to_string(),
                    ));
                    let _ = cascade.write().select_country("");
                }
                Err(e) => dispatch.call(RegistrationAction::SubmitFailed(e.user_message())),
            }
        });
    };

    let state = form.read().clone();
    let errors = &state.errors;

    rsx! {
        div {
            class: "auth-card register-form",

            h2 { class: "form-title", "Register" }

            NoticeBanner { notice: state.notice.clone() }

            ValidatedInput {
                id: "name".to_string(),
                label: "Name".to_string(),
                value: state.name.clone(),
                placeholder: "Your full name".to_string(),
                input_type: InputType::Text,
                error: field_error(errors, Field::Name),
                on_change: move |value: String| dispatch.call(RegistrationAction::SetName(value))
            }

            ValidatedInput {
                id: "email".to_string(),
                label: "Email".to_string(),
                value: state.email.clone(),
                placeholder: "you@example.com".to_string(),
                input_type: InputType::Email,
                error: field_error(errors, Field::Email),
                on_change: move |value: String| dispatch.call(RegistrationAction::SetEmail(value))
            }

            ValidatedInput {
                id: "password".to_string(),
                label: "Password".to_string(),
                value: state.password.clone(),
                placeholder: "At least 6 characters".to_string(),
                input_type: InputType::Password,
                error: field_error(errors, Field::Password),
                on_change: move |value: String| dispatch.call(RegistrationAction::SetPassword(value))
            }

            ValidatedInput {
                id: "mobile".to_string(),
                label: "Mobile Number".to_string(),
                value: state.mobile.clone(),
                placeholder: "10 digit mobile number".to_string(),
                input_type: InputType::Tel,
                error: field_error(errors, Field::Mobile),
                on_change: move |value: String| dispatch.call(RegistrationAction::SetMobile(value))
            }

            GenderGroup {
                selected: state.gender,
                error: field_error(errors, Field::Gender),
                on_select: move |gender: Gender| dispatch.call(RegistrationAction::SetGender(Some(gender)))
            }

            HobbyGroup {
                selected: state.hobbies.clone(),
                error: field_error(errors, Field::Hobbies),
                on_toggle: move |hobby: Hobby| dispatch.call(RegistrationAction::ToggleHobby(hobby))
            }

            div {
                class: "input-section",
                label { class: "input-label", r#for: "profilePic", "Profile Picture" }
                input {
                    id: "profilePic",
                    name: "profilePic",
                    r#type: "file",
                    accept: "image/*",
                    class: field_class(errors.contains_key(&Field::ProfilePicture)),
                    onchange: move |evt: FormEvent| async move {
                        let file = selected_files(&evt).await.into_iter().next();
                        dispatch.call(RegistrationAction::SetProfilePicture(file));
                    }
                }
                FieldError { message: field_error(errors, Field::ProfilePicture) }
            }

            LocationSelector {
                cascade: cascade,
                country_error: field_error(errors, Field::Country),
                state_error: field_error(errors, Field::State),
                city_error: field_error(errors, Field::City),
            }

            div {
                class: "input-section",
                label { class: "input-label", r#for: "attachments", "Attachments (optional)" }
                input {
                    id: "attachments",
                    name: "attachments",
                    r#type: "file",
                    multiple: true,
                    class: "input-field",
                    onchange: move |evt: FormEvent| async move {
                        let files = selected_files(&evt).await;
                        dispatch.call(RegistrationAction::SetAttachments(files));
                    }
                }
                if !state.attachments.is_empty() {
                    ul {
                        class: "attachment-list",
                        for file in state.attachments.iter() {
                            li { key: "{file.name}", "{file.name}" }
                        }
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    r#type: "button",
                    class: "primary-button",
                    disabled: state.submitting,
                    onclick: on_submit,
                    if state.submitting { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "form-footer",
                "Already have an account? "
                a {
                    class: "form-link",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        navigator.navigate(Navigation::Login { error: None });
                    },
                    "Login"
                }
            }
        }
    }
}
