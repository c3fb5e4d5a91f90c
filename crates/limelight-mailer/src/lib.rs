use std::sync::Mutex;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Process-wide notification sender. Constructed once at startup and shared
/// through the app state; sends are best-effort and callers own the decision
/// of whether a failure matters.
pub struct Mailer {
    inner: Inner,
}

enum Inner {
    Smtp(Smtp),
    Memory(Memory),
    Disabled,
}

struct Smtp {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    operator: Mailbox,
}

struct Memory {
    operator: String,
    sent: Mutex<Vec<RecordedMail>>,
}

/// One captured send attempt from a memory mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMail {
    pub to: String,
    pub subject: String,
}

impl Mailer {
    /// `operator` falls back to the sending account when unset, so operator
    /// notifications land in the site's own inbox.
    pub fn smtp(
        host: &str,
        user: &str,
        pass: &str,
        operator: Option<&str>,
    ) -> Result<Self, MailError> {
        let from: Mailbox = user.parse()?;
        let operator: Mailbox = match operator {
            Some(addr) => addr.parse()?,
            None => from.clone(),
        };
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .build();
        info!("Mailer configured via {} as {}", host, from);
        Ok(Self {
            inner: Inner::Smtp(Smtp {
                transport,
                from,
                operator,
            }),
        })
    }

    /// Captures sends in memory instead of delivering them; `sent` exposes
    /// the attempts in order.
    pub fn memory(operator: &str) -> Self {
        Self {
            inner: Inner::Memory(Memory {
                operator: operator.to_string(),
                sent: Mutex::new(Vec::new()),
            }),
        }
    }

    /// No-op mailer for when SMTP credentials are absent. Sends are logged
    /// and reported as successful.
    pub fn disabled() -> Self {
        Self {
            inner: Inner::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.inner, Inner::Disabled)
    }

    /// Send attempts captured so far; empty unless this is a memory mailer.
    pub fn sent(&self) -> Vec<RecordedMail> {
        match &self.inner {
            Inner::Memory(memory) => memory
                .sent
                .lock()
                .map(|sent| sent.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), MailError> {
        match &self.inner {
            Inner::Smtp(smtp) => smtp.deliver(to.parse()?, subject, body).await,
            Inner::Memory(memory) => {
                memory.record(to, subject);
                Ok(())
            }
            Inner::Disabled => {
                warn!("Mailer disabled, dropping \"{}\" to {}", subject, to);
                Ok(())
            }
        }
    }

    pub async fn send_to_operator(&self, subject: &str, body: String) -> Result<(), MailError> {
        match &self.inner {
            Inner::Smtp(smtp) => smtp.deliver(smtp.operator.clone(), subject, body).await,
            Inner::Memory(memory) => {
                let operator = memory.operator.clone();
                memory.record(&operator, subject);
                Ok(())
            }
            Inner::Disabled => {
                warn!(
                    "Mailer disabled, dropping operator notification \"{}\"",
                    subject
                );
                Ok(())
            }
        }
    }
}

impl Smtp {
    async fn deliver(&self, to: Mailbox, subject: &str, body: String) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.clone())
            .subject(subject)
            .body(body)?;
        self.transport.send(message).await?;
        info!("Sent \"{}\" to {}", subject, to);
        Ok(())
    }
}

impl Memory {
    fn record(&self, to: &str, subject: &str) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(RecordedMail {
                to: to.to_string(),
                subject: subject.to_string(),
            });
        }
    }
}
