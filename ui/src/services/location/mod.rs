pub mod alias;
pub mod fallback;
pub mod provider;
pub mod reference;
pub mod source;

pub use alias::normalize_country_code;
pub use provider::LocationProvider;
pub use source::{HttpLocationSource, LocationSource};
