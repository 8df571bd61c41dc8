use serde::{Deserialize, Serialize};

/// Opaque session/token payload returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionPayload(pub serde_json::Value);

/// Body of `POST /api/auth/{provider}/callback`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeExchangeRequest {
    pub code: String,
    pub state: Option<String>,
}

/// Body of `POST /api/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/auth/register`
///
/// Files are described by name and size; uploading their contents is left to
/// the backend's own upload endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub gender: String,
    pub hobbies: Vec<String>,
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "profilePic")]
    pub profile_picture: FileDescriptor,
    pub attachments: Vec<FileDescriptor>,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("country", &self.country)
            .field("state", &self.state)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: Option<u64>,
}

/// Country entry as served by the public country-list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCountry {
    pub name: RemoteCountryName,
    pub cca2: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCountryName {
    pub common: String,
}
