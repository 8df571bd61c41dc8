pub mod form_validation;
pub mod submission;
pub mod types;

pub use form_validation::*;
pub use submission::{complete_login, complete_registration, report_invalid};
pub use types::*;
