//! Feature Logic
//!
//! Dioxus-free state and rules behind the views:
//!
//! - **auth**: Login and registration form state, validators and submission
//! - **location**: The cascading country → state → city selection
//! - **oauth**: Provider redirect and callback handshake
//! - **notice**: Banner messages shared by all of the above

pub mod auth;
pub mod location;
pub mod notice;
pub mod oauth;
