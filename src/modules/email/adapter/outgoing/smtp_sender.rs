use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::application::ports::outgoing::{EmailError, EmailSender};

/// Thin seam over the lettre transport so tests can swap it out.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailError::Build(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        })
    }

    /// Plaintext relay for local development (Mailpit, MailHog).
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| EmailError::Build(format!("invalid from address: {e:?}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::Build(format!("invalid to address: {e:?}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer.send(email).await.map_err(EmailError::Send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockMailer;

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            panic!("send must not be reached when the message fails to build");
        }
    }

    #[tokio::test]
    async fn sends_a_well_formed_message() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(MockMailer), "noreply@example.com");

        let result = sender
            .send("recipient@example.com", "Test", "<p>Unit test</p>")
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
    }

    #[tokio::test]
    async fn invalid_from_address_fails_at_build_time() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "not-an-address");

        let result = sender
            .send("recipient@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(matches!(result, Err(EmailError::Build(_))));
    }

    #[tokio::test]
    async fn invalid_to_address_fails_at_build_time() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "noreply@example.com");

        let result = sender.send("not-an-address", "Subject", "<p>Test</p>").await;

        assert!(matches!(result, Err(EmailError::Build(_))));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_send_error() {
        struct FailingMailer;

        #[async_trait]
        impl Mailer for FailingMailer {
            async fn send(&self, _email: Message) -> Result<(), String> {
                Err("connection refused".to_string())
            }
        }

        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "noreply@example.com");

        let result = sender
            .send("recipient@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(matches!(result, Err(EmailError::Send(_))));
    }
}
