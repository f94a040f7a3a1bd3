use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Rejects passwords bcrypt would silently truncate. Multi-byte characters
/// count by their UTF-8 length.
pub fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("Password must not exceed 72 bytes".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(rename = "senha")]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AuthMessage {
    pub msg: &'static str,
}
