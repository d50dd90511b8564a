//! Delivery log contract
//!
//! An append-only audit trail of confirmed sends. One entry per successful
//! transport call; entries are never amended or removed.

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::mock;

use crate::domain::campaign::errors::DeliveryLogError;

/// One confirmed send, in the canonical
/// `timestamp,recipient,sender,subject` field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryLogEntry {
    /// When the transport accepted the message
    pub timestamp: DateTime<Utc>,

    /// The recipient address
    pub recipient: String,

    /// The sender identity the message went out as
    pub sender: String,

    /// The subject line that was sent
    pub subject: String,
}

impl DeliveryLogEntry {
    /// The entry as one CSV line, timestamp rendered as RFC 3339 UTC
    pub fn to_csv_line(&self) -> String {
        format!(
            "{timestamp},{recipient},{sender},{subject}",
            timestamp = self.timestamp.to_rfc3339(),
            recipient = self.recipient,
            sender = self.sender,
            subject = self.subject,
        )
    }
}

/// Append-only delivery log
pub trait DeliveryLog: Clone + Send + Sync + 'static {
    /// Append one entry.
    ///
    /// # Returns
    /// A [`Result`] indicating whether the entry was durably appended.
    fn record(&self, entry: &DeliveryLogEntry) -> Result<(), DeliveryLogError>;
}

#[cfg(test)]
mock! {
    pub DeliveryLog {}

    impl Clone for DeliveryLog {
        fn clone(&self) -> Self;
    }

    impl DeliveryLog for DeliveryLog {
        fn record(&self, entry: &DeliveryLogEntry) -> Result<(), DeliveryLogError>;
    }
}
