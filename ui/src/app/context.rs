use std::rc::Rc;
use tracing::warn;

use crate::services::client::{AuthApi, HttpAuthApi};
use crate::services::config::AuthConfig;
use crate::services::errors::AuthResult;
use crate::services::events::{CompositeEventHandler, SharedEventHandler};
use crate::services::location::{HttpLocationSource, LocationProvider};
use crate::services::storage::{BrowserSessionStore, SessionStore};

/// Collaborators shared with every component through context
#[derive(Clone)]
pub struct AuthServices {
    pub config: AuthConfig,
    pub api: Rc<dyn AuthApi>,
    pub locations: Rc<LocationProvider<HttpLocationSource>>,
    pub sessions: Rc<dyn SessionStore>,
    pub events: SharedEventHandler,
}

impl AuthServices {
    pub fn from_config(config: AuthConfig) -> AuthResult<Self> {
        if let Err(problems) = config.validate() {
            for problem in problems {
                warn!("{}", problem);
            }
        }

        let events: SharedEventHandler = Rc::new(CompositeEventHandler::with_logging());
        let api = HttpAuthApi::new(config.clone())?;
        let source = HttpLocationSource::new(config.clone())?;

        Ok(Self {
            api: Rc::new(api),
            locations: Rc::new(LocationProvider::new(source, events.clone())),
            sessions: Rc::new(BrowserSessionStore),
            events,
            config,
        })
    }
}
