use dioxus::prelude::*;

use crate::app::AuthServices;
use crate::components::display::NoticeBanner;
use crate::components::forms::SocialLoginButtons;
use crate::components::input::{InputType, ValidatedInput};
use crate::features::auth::{
    complete_login, report_invalid, Field, LoginAction, LoginForm, Submission,
};
use crate::features::notice::Notice;
use crate::services::events::FormKind;
use crate::services::navigation::{Navigation, NavigatorHandle};
use crate::services::storage::FlashStore;
use crate::utils::field_error;

#[derive(Props, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Error carried from another view, e.g. a failed OAuth callback
    #[props(default)]
    pub error: Option<String>,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    let services = use_context::<AuthServices>();
    let navigator = use_context::<NavigatorHandle>();

    let carried = use_hook(|| props.error.clone().or_else(FlashStore::take_error));
    let mut carried_error = use_signal(move || carried);

    let mut form = use_signal(LoginForm::default);
    let dispatch = EventHandler::new(move |action: LoginAction| {
        form.with_mut(|f| f.reduce_in_place(action));
    });

    let on_submit = {
        let navigator = navigator.clone();
        move |_: MouseEvent| {
            let request = match form.with_mut(|f| f.submit()) {
                Submission::Ready(request) => request,
                Submission::Invalid => {
                    report_invalid(&*services.events, FormKind::Login, &form.read().errors);
                    return;
                }
                Submission::InFlight => return,
            };
            carried_error.set(None);

            let services = services.clone();
            let navigator = navigator.clone();
            spawn(async move {
                let result = complete_login(
                    &*services.api,
                    &*services.sessions,
                    navigator.as_navigator(),
                    &*services.events,
                    request,
                )
                .await;
                match result {
                    Ok(()) => dispatch.call(LoginAction::SubmitSucceeded),
                    Err(e) => dispatch.call(LoginAction::SubmitFailed(e.user_message())),
                }
            });
        }
    };

    let state = form.read().clone();

    rsx! {
        div {
            class: "auth-card login-form",

            h2 { class: "form-title", "Login" }

            NoticeBanner { notice: carried_error().map(Notice::error) }

            SocialLoginButtons {
                on_error: move |message: String| carried_error.set(Some(message))
            }

            div { class: "divider", span { "Or continue with email" } }

            NoticeBanner { notice: state.notice.clone() }

            ValidatedInput {
                id: "email".to_string(),
                label: "Email".to_string(),
                value: state.email.clone(),
                placeholder: "you@example.com".to_string(),
                input_type: InputType::Email,
                error: field_error(&state.errors, Field::Email),
                on_change: move |value: String| dispatch.call(LoginAction::SetEmail(value))
            }

            ValidatedInput {
                id: "password".to_string(),
                label: "Password".to_string(),
                value: state.password.clone(),
                placeholder: "Enter your password".to_string(),
                input_type: InputType::Password,
                error: field_error(&state.errors, Field::Password),
                on_change: move |value: String| dispatch.call(LoginAction::SetPassword(value))
            }

            div {
                class: "button-section",
                button {
                    r#type: "button",
                    class: "primary-button",
                    disabled: state.submitting,
                    onclick: on_submit,
                    if state.submitting { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "form-footer",
                "Don't have an account? "
                a {
                    class: "form-link",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        navigator.navigate(Navigation::Register);
                    },
                    "Register"
                }
            }
        }
    }
}
