//! User Interface Components
//!
//! - **forms**: Login and registration forms, location selectors, social login
//! - **display**: Banners, loading indicators, fallback and dashboard views
//! - **input**: Labelled inputs with field errors
//! - **oauth_callback**: Landing view for the provider redirect

pub mod display;
pub mod forms;
pub mod input;
pub mod oauth_callback;

pub use oauth_callback::OAuthCallback;
