use dioxus::prelude::*;
use tracing::warn;
use ui::services::navigation::{self as auth_nav, redirect_browser, Navigation, NavigatorHandle};
use ui::services::storage::FlashStore;
use ui::{AuthShell, AuthenticatedView, LoginPage, OAuthCallback, RegisterPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Sign in" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/callback/:provider")]
        Callback { provider: String },
        #[route("/dashboard")]
        Dashboard {},
}

/// Executes navigation commands against the router
struct RouterNavigator {
    router: Navigator,
}

impl auth_nav::Navigator for RouterNavigator {
    fn navigate(&self, to: Navigation) {
        let failure = match to {
            Navigation::Login { error } => {
                if let Some(message) = error {
                    if let Err(e) = FlashStore::store_error(&message) {
                        warn!("Could not carry login error: {}", e);
                    }
                }
                self.router.replace(Route::Login {})
            }
            Navigation::Register => self.router.push(Route::Register {}),
            Navigation::Dashboard => self.router.replace(Route::Dashboard {}),
            Navigation::External(url) => {
                redirect_browser(&url);
                None
            }
        };
        if let Some(failure) = failure {
            warn!("Navigation failed: {:?}", failure);
        }
    }
}

#[component]
fn Shell() -> Element {
    let router = navigator();
    let handle = use_hook(|| NavigatorHandle::new(RouterNavigator { router }));

    rsx! {
        AuthShell {
            navigator: handle,
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterPage {} }
}

#[component]
fn Callback(provider: String) -> Element {
    rsx! { OAuthCallback { provider } }
}

#[component]
fn Dashboard() -> Element {
    rsx! { AuthenticatedView {} }
}
