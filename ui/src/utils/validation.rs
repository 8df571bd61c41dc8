use crate::features::auth::{Field, FieldErrors};

pub fn field_error(errors: &FieldErrors, field: Field) -> Option<String> {
    errors.get(&field).cloned()
}

pub fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn field_style(has_error: bool) -> &'static str {
    if has_error {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}

pub fn select_class(has_error: bool, disabled: bool) -> &'static str {
    match (has_error, disabled) {
        (true, _) => "select-field input-invalid",
        (false, true) => "select-field select-disabled",
        (false, false) => "select-field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_lookup() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Invalid email address".to_string());

        assert_eq!(
            field_error(&errors, Field::Email).as_deref(),
            Some("Invalid email address")
        );
        assert_eq!(field_error(&errors, Field::Password), None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(field_class(true), "input-field input-invalid");
        assert_eq!(field_style(false), "");
        assert_eq!(select_class(false, true), "select-field select-disabled");
        assert_eq!(select_class(true, true), "select-field input-invalid");
    }
}
