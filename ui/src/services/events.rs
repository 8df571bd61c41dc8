//! Structured application events
//!
//! Everything worth observing (fetch fallbacks, stale responses, validation
//! failures, OAuth transitions) is emitted as an [`AuthEvent`]. The embedding
//! app subscribes by adding handlers to a [`CompositeEventHandler`].

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

use crate::features::location::LocationLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    CountriesLoaded { count: usize, fallback: bool },
    LocationFetchFailed { scope: String, error: String },
    FallbackLocationsUsed { scope: String, count: usize },
    StaleLocationResponseDiscarded { level: LocationLevel },
    ValidationFailed { form: FormKind, fields: Vec<String> },
    FormSubmitted { form: FormKind },
    FormRejected { form: FormKind, error: String },
    OAuthRedirect { provider: String },
    OAuthCallbackReceived { provider: String, has_code: bool },
    OAuthStateMismatch { provider: String, received: Option<String> },
    OAuthExchangeSucceeded { provider: String },
    OAuthExchangeFailed { provider: String, error: String },
    SignedOut,
    RenderFault { message: String },
}

/// Event handler for application events
pub trait AuthEventHandler {
    fn handle_event(&self, event: AuthEvent);
}

/// Shared handle passed through component context
pub type SharedEventHandler = Rc<dyn AuthEventHandler>;

/// Composite event handler that forwards events to multiple handlers
pub struct CompositeEventHandler {
    handlers: RefCell<Vec<Box<dyn AuthEventHandler>>>,
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Composite with the logging handler already subscribed
    pub fn with_logging() -> Self {
        let composite = Self::new();
        composite.add_handler(LoggingEventHandler);
        composite
    }

    pub fn add_handler<H: AuthEventHandler + 'static>(&self, handler: H) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}

impl AuthEventHandler for CompositeEventHandler {
    fn handle_event(&self, event: AuthEvent) {
        for handler in self.handlers.borrow().iter() {
            handler.handle_event(event.clone());
        }
    }
}

/// Forwards events to `tracing`
pub struct LoggingEventHandler;

impl AuthEventHandler for LoggingEventHandler {
    fn handle_event(&self, event: AuthEvent) {
        match event {
            AuthEvent::CountriesLoaded { count, fallback } => {
                if fallback {
                    warn!("[Event] Country list unavailable, using {} fallback entries", count);
                } else {
                    info!("[Event] Loaded {} countries", count);
                }
            }
            AuthEvent::LocationFetchFailed { scope, error } => {
                warn!("[Event] Location fetch failed for {}: {}", scope, error);
            }
            AuthEvent::FallbackLocationsUsed { scope, count } => {
                info!("[Event] Using {} fallback entries for {}", count, scope);
            }
            AuthEvent::StaleLocationResponseDiscarded { level } => {
                debug!("[Event] Discarded stale {:?} response", level);
            }
            AuthEvent::ValidationFailed { form, fields } => {
                debug!("[Event] {} form invalid: {}", form.as_str(), fields.join(", "));
            }
            AuthEvent::FormSubmitted { form } => {
                info!("[Event] {} form submitted", form.as_str());
            }
            AuthEvent::FormRejected { form, error } => {
                warn!("[Event] {} form rejected: {}", form.as_str(), error);
            }
            AuthEvent::OAuthRedirect { provider } => {
                info!("[Event] Redirecting to {} for authorization", provider);
            }
            AuthEvent::OAuthCallbackReceived { provider, has_code } => {
                info!("[Event] {} callback received (code present: {})", provider, has_code);
            }
            AuthEvent::OAuthStateMismatch { provider, received } => {
                warn!("[Event] {} callback state mismatch: {:?}", provider, received);
            }
            AuthEvent::OAuthExchangeSucceeded { provider } => {
                info!("[Event] {} code exchange succeeded", provider);
            }
            AuthEvent::OAuthExchangeFailed { provider, error } => {
                error!("[Event] {} code exchange failed: {}", provider, error);
            }
            AuthEvent::SignedOut => {
                info!("[Event] Signed out");
            }
            AuthEvent::RenderFault { message } => {
                error!("[Event] Render fault captured: {}", message);
            }
        }
    }
}

/// Keeps every event it sees; useful for tests and debugging overlays
#[derive(Clone, Default)]
pub struct RecordingEventHandler {
    events: Rc<RefCell<Vec<AuthEvent>>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuthEvent> {
        self.events.borrow().clone()
    }
}

impl AuthEventHandler for RecordingEventHandler {
    fn handle_event(&self, event: AuthEvent) {
        self.events.borrow_mut().push(event);
    }
}
