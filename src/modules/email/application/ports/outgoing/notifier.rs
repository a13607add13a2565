use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Token creation failed: {0}")]
    Token(String),

    #[error("Email delivery failed: {0}")]
    Delivery(String),
}

/// Account-lifecycle mail. Implementations mint the embedded token
/// themselves from the claim ingredient they are handed, so callers never
/// touch link formats.
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    /// Activation link bound to the account's current credentials: the token
    /// embeds `credential_fingerprint`, so changing the password invalidates
    /// every outstanding link.
    async fn send_activation_email(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        credential_fingerprint: &str,
    ) -> Result<(), NotificationError>;

    /// Reset link carrying the single-use `reset_jti` marker.
    async fn send_password_reset_email(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        reset_jti: &str,
    ) -> Result<(), NotificationError>;
}

/// What the RSVP confirmation mail tells the attendee.
#[derive(Debug, Clone)]
pub struct RsvpEmailDetails {
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub event_location: String,
}

#[async_trait]
pub trait RsvpNotifier: Send + Sync {
    async fn send_rsvp_confirmation(
        &self,
        username: &str,
        email: &str,
        details: RsvpEmailDetails,
    ) -> Result<(), NotificationError>;
}
