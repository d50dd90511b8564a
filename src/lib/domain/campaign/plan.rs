//! Delivery plan
//!
//! Decides which credential each recipient's message is sent with, and which
//! subject override (if any) applies.

use crate::domain::{
    campaign::{
        credentials::{resolve_bound, ConfigMap},
        errors::CredentialError,
        models::recipient::Recipient,
    },
    comms::mailer::Credential,
};

/// The credential and from-address chosen for one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The sender address the message is attributed to
    pub from: String,

    /// The credential the transport authenticates with
    pub credential: Credential,
}

/// How recipients are mapped to sending accounts
#[derive(Debug, Clone)]
pub enum DeliveryPlan {
    /// Each recipient row explicitly names its sender; credentials are
    /// looked up per row in the configuration map
    Bound {
        /// Configuration snapshot the per-recipient lookups run against
        vars: ConfigMap,
    },

    /// Senders are discovered up front and cycled across successful sends
    Rotation {
        /// Discovered accounts, in discovery order
        accounts: Vec<Credential>,

        /// Subject lines cycled by row index; empty means "generate"
        subjects: Vec<String>,
    },
}

impl DeliveryPlan {
    /// A bound-mode plan over a configuration snapshot
    pub fn bound(vars: ConfigMap) -> Self {
        Self::Bound { vars }
    }

    /// A rotation-mode plan over discovered accounts and an optional
    /// subject list
    pub fn rotation(accounts: Vec<Credential>, subjects: Vec<String>) -> Self {
        Self::Rotation { accounts, subjects }
    }

    /// Whether recipients with a finalized status marker are skipped.
    /// Only bound mode gates on status; rotation mode processes every row
    /// with a non-empty address.
    pub fn gates_on_status(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }

    /// Select the credential for one recipient.
    ///
    /// Bound mode is a direct lookup keyed by the row's assigned sender, so
    /// the same recipient always maps to the same credential within a run.
    /// Rotation mode picks `accounts[sent_count % accounts.len()]`: the
    /// index advances only on confirmed successful sends, never on
    /// attempts, so a failure leaves the next attempt on the same account.
    pub fn select(
        &self,
        recipient: &Recipient,
        sent_count: usize,
    ) -> Result<Selection, CredentialError> {
        match self {
            Self::Bound { vars } => {
                let sender = recipient
                    .assigned_sender
                    .as_deref()
                    .map(str::trim)
                    .filter(|sender| !sender.is_empty())
                    .ok_or_else(|| CredentialError::MissingAssignedSender {
                        recipient: recipient.address.clone(),
                    })?;

                let credential = resolve_bound(vars, sender)?;

                Ok(Selection {
                    from: sender.to_string(),
                    credential,
                })
            }
            Self::Rotation { accounts, .. } => {
                if accounts.is_empty() {
                    return Err(CredentialError::NoAccountsConfigured);
                }

                let credential = accounts[sent_count % accounts.len()].clone();

                Ok(Selection {
                    from: credential.identity.clone(),
                    credential,
                })
            }
        }
    }

    /// The subject override for one recipient, if any: the row's own subject
    /// in bound mode, the subject list cycled by row index in rotation mode.
    pub fn subject_override<'a>(
        &'a self,
        recipient: &'a Recipient,
        row_index: usize,
    ) -> Option<&'a str> {
        match self {
            Self::Bound { .. } => recipient.subject.as_deref(),
            Self::Rotation { subjects, .. } => {
                if subjects.is_empty() {
                    None
                } else {
                    Some(subjects[row_index % subjects.len()].as_str())
                }
            }
        }
    }
}
