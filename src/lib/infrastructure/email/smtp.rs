//! SMTP email transport implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};

use crate::domain::comms::{
    errors::EmailError,
    mailer::{Credential, Mailer},
    message::OutgoingEmail,
};

/// SMTP relay configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpServerConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer; the account to authenticate as is supplied per send
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpServerConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpServerConfig) -> Self {
        Self { config }
    }

    /// Build a transport to the configured relay, authenticated as the
    /// given account
    pub fn transport(&self, credential: &Credential) -> Result<SmtpTransport> {
        let creds = Credentials::new(credential.identity.clone(), credential.secret.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, credential: &Credential, email: &OutgoingEmail) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(email.from.to_string().parse()?)
            .to(email.to.to_string().parse()?)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.plain_body.clone(),
                email.html_body.clone(),
            ))?;

        match self.transport(credential)?.send(&message) {
            Ok(_) => Ok(()),
            Err(e) => Err(EmailError::UnknownError(e.into())),
        }
    }
}
