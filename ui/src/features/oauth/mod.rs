pub mod handshake;
pub mod provider;

pub use handshake::{
    begin_login, complete_callback, CallbackContext, CallbackParams, HandshakePhase,
};
pub use provider::{OAuthProvider, OAuthRequest};
