use crate::modules::deals::core::errors::ApplicationError;

pub const ADMIN_TOKEN_VAR: &str = "ADMIN_TOKEN";

/// Compares the supplied admin token with the configured one, both trimmed.
///
/// An unset or blank secret is a configuration error, not a rejection.
pub fn authorize(expected: Option<&str>, supplied: Option<&str>) -> Result<(), ApplicationError> {
    let expected = expected.map(str::trim).unwrap_or_default();
    if expected.is_empty() {
        let message = format!("Missing {ADMIN_TOKEN_VAR} env var");
        return Err(ApplicationError::Configuration(message));
    }

    match supplied.map(str::trim) {
        Some(token) if !token.is_empty() && token == expected => Ok(()),
        _ => Err(ApplicationError::Forbidden),
    }
}
