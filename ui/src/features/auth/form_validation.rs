use super::types::*;
use crate::features::location::LocationCascade;

pub const PROFILE_PICTURE_NOT_IMAGE: &str = "Profile picture must be an image file";

const NAME_MIN_CHARS: usize = 2;
const PASSWORD_MIN_CHARS: usize = 6;
const MOBILE_DIGITS: usize = 10;

/// `non-space@non-space`
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty()
        && !email.chars().any(char::is_whitespace)
        && email
            .char_indices()
            .any(|(i, c)| c == '@' && i > 0 && i + 1 < email.len())
}

/// Exactly ten ASCII digits
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == MOBILE_DIGITS && mobile.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required".to_string())
    } else if name.chars().count() < NAME_MIN_CHARS {
        Some("Name must be at least 2 characters".to_string())
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        Some("Password must be at least 6 characters".to_string())
    } else {
        None
    }
}

pub fn validate_mobile(mobile: &str) -> Option<String> {
    let mobile = mobile.trim();
    if mobile.is_empty() {
        Some("Mobile number is required".to_string())
    } else if !is_valid_mobile(mobile) {
        Some("Invalid mobile number (10 digits required)".to_string())
    } else {
        None
    }
}

pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    insert(&mut errors, Field::Email, validate_email(&form.email));
    insert(&mut errors, Field::Password, validate_password(&form.password));
    errors
}

pub fn validate_registration(form: &RegistrationForm, location: &LocationCascade) -> FieldErrors {
    let mut errors = FieldErrors::new();
    insert(&mut errors, Field::Name, validate_name(&form.name));
    insert(&mut errors, Field::Email, validate_email(&form.email));
    insert(&mut errors, Field::Password, validate_password(&form.password));
    insert(&mut errors, Field::Mobile, validate_mobile(&form.mobile));

    if form.gender.is_none() {
        errors.insert(Field::Gender, "Gender is required".to_string());
    }
    if form.hobbies.is_empty() {
        errors.insert(Field::Hobbies, "Select at least one hobby".to_string());
    }

    match &form.profile_picture {
        None => {
            errors.insert(Field::ProfilePicture, "Profile picture is required".to_string());
        }
        Some(file) if !file.is_image() => {
            errors.insert(Field::ProfilePicture, PROFILE_PICTURE_NOT_IMAGE.to_string());
        }
        Some(_) => {}
    }

    let selection = &location.selection;
    let required = location.requirements();
    if selection.country.is_none() {
        errors.insert(Field::Country, "Country is required".to_string());
    }
    if required.state && selection.state.is_none() {
        errors.insert(Field::State, "State is required".to_string());
    }
    if required.city && selection.city.is_none() {
        errors.insert(Field::City, "City is required".to_string());
    }

    errors
}

fn insert(errors: &mut FieldErrors, field: Field, message: Option<String>) {
    if let Some(message) = message {
        errors.insert(field, message);
    }
}
