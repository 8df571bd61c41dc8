pub mod choice_group;
pub mod location_selector;
pub mod login_form;
pub mod register_form;
pub mod social_login;

pub use choice_group::*;
pub use location_selector::*;
pub use login_form::*;
pub use register_form::*;
pub use social_login::*;
