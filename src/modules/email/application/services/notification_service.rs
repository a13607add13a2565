use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::email::application::ports::outgoing::{
    AccountNotifier, EmailSender, NotificationError, RsvpEmailDetails, RsvpNotifier,
};

/// Composes the outbound mails and mints the tokens their links embed.
/// Everything above this service deals in claim ingredients (fingerprint,
/// jti); link formats and wording live here only.
#[derive(Clone)]
pub struct NotificationService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    base_url: String,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("sender", &"<dyn EmailSender>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        base_url: &str,
    ) -> Self {
        Self {
            sender,
            token_provider,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AccountNotifier for NotificationService {
    async fn send_activation_email(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        credential_fingerprint: &str,
    ) -> Result<(), NotificationError> {
        let token = self
            .token_provider
            .issue_activation_token(user_id, credential_fingerprint)
            .map_err(|e| NotificationError::Token(e.to_string()))?;

        let link = format!("{}/api/auth/activate/{}/{}", self.base_url, user_id, token);

        let body = format!(
            "<p>Hi {username},</p>\
             <p>Welcome to Gatherly! Click the link below to activate your account:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>If you did not sign up, you can ignore this email.</p>"
        );

        self.sender
            .send(email, "Activate your Gatherly account", &body)
            .await
            .map_err(|e| NotificationError::Delivery(e.to_string()))
    }

    async fn send_password_reset_email(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        reset_jti: &str,
    ) -> Result<(), NotificationError> {
        let token = self
            .token_provider
            .issue_password_reset_token(user_id, reset_jti)
            .map_err(|e| NotificationError::Token(e.to_string()))?;

        let body = format!(
            "<p>Hi {username},</p>\
             <p>We received a request to reset your Gatherly password. Use the token \
             below to set a new one:</p>\
             <p><code>{token}</code></p>\
             <p>The token works once. If you requested another reset since, only the \
             newest token is valid. If this wasn't you, your password is unchanged.</p>"
        );

        self.sender
            .send(email, "Reset your Gatherly password", &body)
            .await
            .map_err(|e| NotificationError::Delivery(e.to_string()))
    }
}

#[async_trait]
impl RsvpNotifier for NotificationService {
    async fn send_rsvp_confirmation(
        &self,
        username: &str,
        email: &str,
        details: RsvpEmailDetails,
    ) -> Result<(), NotificationError> {
        let subject = format!("RSVP confirmed: {}", details.event_name);

        let body = format!(
            "<p>Hi {username},</p>\
             <p>Your spot at <strong>{}</strong> is confirmed.</p>\
             <ul>\
             <li>Date: {}</li>\
             <li>Time: {}</li>\
             <li>Location: {}</li>\
             </ul>\
             <p>See you there!</p>",
            details.event_name,
            details.event_date.format("%d %B %Y"),
            details.event_time.format("%H:%M"),
            details.event_location,
        );

        self.sender
            .send(email, &subject, &body)
            .await
            .map_err(|e| NotificationError::Delivery(e.to_string()))
    }
}
