//! This crate contains the shared UI for the authentication front end: login
//! and registration forms, cascading location selectors and the OAuth
//! redirect handshake.

pub mod app;
pub use app::{AuthServices, AuthShell};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use components::display::AuthenticatedView;
pub use components::forms::{LoginPage, RegisterPage};
pub use components::OAuthCallback;
