//! Error types for the campaign domain

use thiserror::Error;

use crate::domain::comms::{
    errors::EmailError, value_objects::email_address::EmailAddressError,
};

/// Credential resolution errors
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The configuration has no usable identity/secret pair for a sender
    #[error("missing SMTP credentials for {sender} (expected {user_key}, {pass_key})")]
    MissingCredentials {
        /// The sender identity the lookup was performed for
        sender: String,

        /// The configuration key expected to hold the identity
        user_key: String,

        /// The configuration key expected to hold the secret
        pass_key: String,
    },

    /// A bound-mode recipient row names no sender
    #[error("recipient {recipient} has no assigned sender")]
    MissingAssignedSender {
        /// The recipient address of the offending row
        recipient: String,
    },

    /// Discovery found no complete account pair at all
    #[error("no SMTP accounts configured (expected SMTP_USER_<KEY> and SMTP_PASS_<KEY> pairs)")]
    NoAccountsConfigured,
}

/// Delivery log errors
#[derive(Debug, Error)]
pub enum DeliveryLogError {
    /// The log entry could not be appended
    #[error("could not append to the delivery log")]
    AppendError(#[from] std::io::Error),
}

/// Everything that can go wrong while dispatching one recipient
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Credential selection failed for this recipient
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    /// The recipient or sender address is unusable
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] EmailAddressError),

    /// The message body failed to render
    #[error(transparent)]
    Template(#[from] askama::Error),

    /// The transport rejected the message
    #[error(transparent)]
    Transport(#[from] EmailError),

    /// The delivery log rejected the entry after a successful send
    #[error(transparent)]
    Log(#[from] DeliveryLogError),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
