//! Email transport seam

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::comms::{errors::EmailError, message::OutgoingEmail};

/// An (identity, secret) pair authorizing one sending account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// The account identity (mailbox address or account name)
    pub identity: String,

    /// The account secret
    pub secret: String,

    /// The configuration key this credential was discovered under, if any
    pub key: Option<String>,
}

impl Credential {
    /// Create a credential discovered under a configuration key
    pub fn discovered(
        key: impl Into<String>,
        identity: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
            key: Some(key.into()),
        }
    }
}

/// Email transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Submit one email through the transport, authenticated as `credential`.
    ///
    /// # Arguments
    /// * `credential` - The [`Credential`] to authenticate the submission with.
    /// * `email` - The [`OutgoingEmail`] to submit.
    ///
    /// # Returns
    /// A [`Result`] indicating whether the transport accepted the message.
    async fn send(&self, credential: &Credential, email: &OutgoingEmail) -> Result<(), EmailError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, credential: &Credential, email: &OutgoingEmail) -> Result<(), EmailError>;
    }
}
