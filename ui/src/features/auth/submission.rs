//! Hand-off of validated forms to the backend

use tracing::{info, warn};

use super::types::{error_field_names, FieldErrors};
use crate::services::client::{AuthApi, LoginRequest, RegistrationRequest};
use crate::services::errors::{AuthError, AuthResult};
use crate::services::events::{AuthEvent, AuthEventHandler, FormKind};
use crate::services::navigation::{Navigation, Navigator};
use crate::services::storage::SessionStore;

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! You can now log in.";

/// Emit the validation failure for a rejected submit
pub fn report_invalid(events: &dyn AuthEventHandler, form: FormKind, errors: &FieldErrors) {
    events.handle_event(AuthEvent::ValidationFailed {
        form,
        fields: error_field_names(errors),
    });
}

/// Post credentials; on success store the session and go to the dashboard
pub async fn complete_login(
    api: &dyn AuthApi,
    sessions: &dyn SessionStore,
    navigator: &dyn Navigator,
    events: &dyn AuthEventHandler,
    request: LoginRequest,
) -> AuthResult<()> {
    events.handle_event(AuthEvent::FormSubmitted {
        form: FormKind::Login,
    });

    let result = match api.login(&request).await {
        Ok(session) => sessions.save(&session),
        Err(e) => Err(AuthError::from(e)),
    };

    match result {
        Ok(()) => {
            info!("Login succeeded for {}", request.email);
            navigator.navigate(Navigation::Dashboard);
            Ok(())
        }
        Err(e) => {
            warn!("Login rejected: {}", e);
            events.handle_event(AuthEvent::FormRejected {
                form: FormKind::Login,
                error: e.to_string(),
            });
            Err(e)
        }
    }
}

/// Post the registration; the caller shows the outcome as a banner
pub async fn complete_registration(
    api: &dyn AuthApi,
    events: &dyn AuthEventHandler,
    request: RegistrationRequest,
) -> AuthResult<()> {
    events.handle_event(AuthEvent::FormSubmitted {
        form: FormKind::Registration,
    });

    match api.register(&request).await {
        Ok(_) => {
            info!("Registration accepted for {}", request.email);
            Ok(())
        }
        Err(e) => {
            let e = AuthError::from(e);
            warn!("Registration rejected: {}", e);
            events.handle_event(AuthEvent::FormRejected {
                form: FormKind::Registration,
                error: e.to_string(),
            });
            Err(e)
        }
    }
}
