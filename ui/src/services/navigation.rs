//! Navigation as an explicit command
//!
//! Components never touch `window.location` or the router directly. They hand a
//! [`Navigation`] to the [`Navigator`] found in context; the `web` crate
//! provides a router-backed implementation, tests provide a recording one.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Login view, optionally carrying an error message to display
    Login { error: Option<String> },
    Register,
    /// Authenticated view
    Dashboard,
    /// Full-page navigation away from the application
    External(url::Url),
}

impl Navigation {
    pub fn login_with_error(message: impl Into<String>) -> Self {
        Navigation::Login {
            error: Some(message.into()),
        }
    }

    /// In-app path for internal targets
    pub fn path(&self) -> String {
        match self {
            Navigation::Login { .. } => "/login".to_string(),
            Navigation::Register => "/register".to_string(),
            Navigation::Dashboard => "/dashboard".to_string(),
            Navigation::External(url) => url.to_string(),
        }
    }
}

pub trait Navigator {
    fn navigate(&self, to: Navigation);
}

/// Cloneable navigator handle stored in component context
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new<N: Navigator + 'static>(navigator: N) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn navigate(&self, to: Navigation) {
        self.0.navigate(to);
    }

    pub fn as_navigator(&self) -> &dyn Navigator {
        self.0.as_ref()
    }
}

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavigatorHandle")
    }
}

/// Records navigation requests instead of performing them
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    history: Rc<RefCell<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: Navigation) {
        self.history.borrow_mut().push(to);
    }
}

/// Full-page redirect through `window.location`
#[cfg(target_arch = "wasm32")]
pub fn redirect_browser(url: &url::Url) {
    let result = web_sys::window()
        .ok_or_else(|| "No window object".to_string())
        .and_then(|w| {
            w.location()
                .set_href(url.as_str())
                .map_err(|e| format!("{:?}", e))
        });
    if let Err(e) = result {
        tracing::error!("Failed to redirect to {}: {}", url, e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_browser(url: &url::Url) {
    tracing::warn!("Browser redirect requested outside a browser: {}", url);
}

/// Origin of the current page, e.g. `https://auth.example.com`
#[cfg(target_arch = "wasm32")]
pub fn current_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_origin() -> Option<String> {
    None
}

/// Raw query string of the current page, including the leading `?`
#[cfg(target_arch = "wasm32")]
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_query() -> String {
    String::new()
}
