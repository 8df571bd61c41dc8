//! Infrastructure Services
//!
//! - **client**: HTTP plumbing and the backend authentication API
//! - **config**: Build-time configuration
//! - **errors**: Application error types
//! - **events**: Structured event emission
//! - **location**: Country, state and city data with fallbacks
//! - **navigation**: Navigation commands and the navigator seam
//! - **storage**: Session and flash-message persistence
//!
//! The services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
pub mod events;
pub mod location;
pub mod navigation;
pub mod storage;
