//! Input validation shared by sign-up and user management.

use thiserror::Error;

const MAX_EMAIL_LEN: usize = 254;
const PHONE_DIGITS: usize = 10;
const MAX_COUNTRY_CODE_DIGITS: usize = 3;

/// Minimum admin password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email address")]
    Email,

    #[error("invalid phone number")]
    Phone,

    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

/// Accepts `local@domain.tld` style addresses.
///
/// # Errors
///
/// Returns [`ValidationError::Email`] when the address is empty, too long,
/// contains whitespace, or lacks a local part or dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::Email);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::Email);
    };

    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::Email);
    }

    let valid_domain = domain
        .split_once('.')
        .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'));

    if !valid_domain {
        return Err(ValidationError::Email);
    }

    Ok(())
}

/// Accepts ten digits, optionally prefixed by `+` and a 1-3 digit country code.
///
/// # Errors
///
/// Returns [`ValidationError::Phone`] for anything else.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = match phone.strip_prefix('+') {
        Some(rest) => {
            let country_code_len = rest.len().saturating_sub(PHONE_DIGITS);

            if !(1..=MAX_COUNTRY_CODE_DIGITS).contains(&country_code_len) {
                return Err(ValidationError::Phone);
            }

            rest
        }
        None if phone.len() == PHONE_DIGITS => phone,
        None => return Err(ValidationError::Phone),
    };

    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::Phone)
    }
}

/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] below [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}
