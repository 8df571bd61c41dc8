// Client-side HTTP access for the authentication UI
//
// - Transport errors and the request deadline helper
// - Wire types shared with the backend
// - The backend authentication API

pub mod auth_api;
pub mod errors;
pub mod http;
pub mod types;

pub use auth_api::{AuthApi, HttpAuthApi};
pub use errors::{ClientError, ClientResult};
pub use http::{build_http_client, get_json, post_json, with_timeout};
pub use types::{
    CodeExchangeRequest, FileDescriptor, LoginRequest, RegistrationRequest, RemoteCountry,
    SessionPayload,
};
