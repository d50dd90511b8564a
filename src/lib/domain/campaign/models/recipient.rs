//! Recipient record

/// Status marker value for rows that are still awaiting a send
pub const STATUS_PENDING: &str = "pending";

/// One row of the recipient feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipient {
    /// The recipient address; may be blank for malformed rows
    pub address: String,

    /// The display name used in the message body
    pub name: Option<String>,

    /// An explicit subject overriding the generated default
    pub subject: Option<String>,

    /// The sender identity this recipient is bound to
    pub assigned_sender: Option<String>,

    /// The status marker, e.g. `pending` or `sent`
    pub status: Option<String>,
}

impl Recipient {
    /// Whether the row carries a usable recipient address
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// Whether the status marker is present and no longer `pending`.
    ///
    /// A missing or blank marker counts as still pending.
    pub fn is_finalized(&self) -> bool {
        match &self.status {
            Some(status) => {
                let status = status.trim();
                !status.is_empty() && !status.eq_ignore_ascii_case(STATUS_PENDING)
            }
            None => false,
        }
    }
}
