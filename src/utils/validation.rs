use validator::ValidationError;

/// Password strength rule: at least 8 characters with one lowercase letter,
/// one uppercase letter, one digit, and one special character.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    if long_enough && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength").with_message(
            "Password must be at least 8 characters and include a lowercase letter, an uppercase letter, a digit, and a special character".into(),
        ))
    }
}
