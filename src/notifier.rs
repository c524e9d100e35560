use crate::config::EmailConfig;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::AsyncSmtpTransport;
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::info;

/// Delivery boundary: takes the finished report and gets it to the user.
/// Transport, authentication, and their failure modes all live behind
/// this trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<()>;
}

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// Builds the SMTP transport from config plus the `SMTP_USER` and
    /// `SMTP_PASS` environment variables. Credentials stay out of the
    /// config file.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let user = std::env::var("SMTP_USER")
            .map_err(|_| AgentError::Config("SMTP_USER missing from environment".to_string()))?;
        let pass = std::env::var("SMTP_PASS")
            .map_err(|_| AgentError::Config("SMTP_PASS missing from environment".to_string()))?;

        let creds = Credentials::new(user, pass);
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| AgentError::Config(format!("invalid smtp_host: {e}")))?
            .credentials(creds)
            .build();

        let from = config
            .from
            .parse()
            .map_err(|e| AgentError::Config(format!("invalid from address: {e}")))?;
        let to = config
            .to
            .parse()
            .map_err(|e| AgentError::Config(format!("invalid to address: {e}")))?;

        Ok(Self { mailer, from, to })
    }
}

/// The aggregator normally guarantees at least the sentinel, but a
/// summarizer can hand back an empty string; never send an empty message.
fn body_or_placeholder(body: &str) -> &str {
    if body.is_empty() {
        "(no content)"
    } else {
        body
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        let body = body_or_placeholder(body);

        let msg = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AgentError::Mail(format!("failed to build message: {e}")))?;

        self.mailer
            .send(msg)
            .await
            .map_err(|e| AgentError::Mail(format!("failed to send: {e}")))?;

        info!("notification sent to {}", self.to);
        Ok(())
    }
}
