use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> Uuid {
        self.0
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

//
// ──────────────────────────────────────────────────────────
// Field rules shared by registration and profile editing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Username must be 3-32 characters of letters, digits or underscores")]
    UsernameInvalid,

    #[error("Password must be at least 8 characters and mix letters with digits")]
    PasswordTooWeak,

    #[error("Phone number must be 7-15 digits, optionally prefixed with +")]
    PhoneInvalid,
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,32}$").expect("valid username pattern"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone pattern"))
}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    if username_regex().is_match(username) {
        Ok(())
    } else {
        Err(FieldError::UsernameInvalid)
    }
}

pub fn validate_password_strength(password: &str) -> Result<(), FieldError> {
    let long_enough = password.chars().count() >= 8;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(FieldError::PasswordTooWeak)
    }
}

pub fn validate_phone_number(phone: &str) -> Result<(), FieldError> {
    if phone_regex().is_match(phone) {
        Ok(())
    } else {
        Err(FieldError::PhoneInvalid)
    }
}
