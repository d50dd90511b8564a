//! Dispatch loop
//!
//! Walks the recipient feed in order, strictly sequentially: compose,
//! select a credential, deliver, record. A failed recipient never aborts
//! the batch; it is reported and the loop moves on.

use std::sync::Arc;

use askama::Template;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    campaign::{
        emails::campaign_update::CampaignUpdateTemplate,
        errors::DeliveryError,
        log::{DeliveryLog, DeliveryLogEntry},
        models::recipient::Recipient,
        plan::DeliveryPlan,
    },
    comms::{
        mailer::Mailer, message::OutgoingEmail, value_objects::email_address::EmailAddress,
    },
};

/// Outcome totals for one dispatch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Recipients the transport accepted a message for
    pub sent: usize,

    /// Recipients whose attempt failed and was reported
    pub failed: usize,

    /// Recipients never attempted (blank address, or finalized status
    /// under a status-gated plan)
    pub skipped: usize,
}

/// Batch dispatcher
#[derive(Debug, Clone)]
pub struct Dispatcher<M, L>
where
    M: Mailer,
    L: DeliveryLog,
{
    mailer: Arc<M>,
    log: Arc<L>,
    plan: DeliveryPlan,
}

impl<M, L> Dispatcher<M, L>
where
    M: Mailer,
    L: DeliveryLog,
{
    /// Create a new dispatcher
    pub fn new(mailer: Arc<M>, log: Arc<L>, plan: DeliveryPlan) -> Self {
        Self { mailer, log, plan }
    }

    /// Process the whole recipient sequence, one at a time, and report the
    /// totals. The number of successful sends always equals the number of
    /// delivery log entries appended during the run.
    pub async fn run(&self, recipients: &[Recipient]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for (row_index, recipient) in recipients.iter().enumerate() {
            if !recipient.has_address() {
                debug!(row = row_index, "skipping row with blank address");
                report.skipped += 1;
                continue;
            }

            if self.plan.gates_on_status() && recipient.is_finalized() {
                debug!(recipient = %recipient.address, "skipping finalized recipient");
                report.skipped += 1;
                continue;
            }

            match self.attempt(row_index, recipient, report.sent).await {
                Ok(entry) => {
                    info!(
                        recipient = %entry.recipient,
                        sender = %entry.sender,
                        "sent"
                    );
                    report.sent += 1;
                }
                Err(err) => {
                    warn!(
                        recipient = %recipient.address,
                        error = %err,
                        "delivery failed"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            sent = report.sent,
            failed = report.failed,
            skipped = report.skipped,
            "dispatch run finished"
        );

        report
    }

    /// One delivery attempt: compose, select, send, record.
    ///
    /// The log append sits inside the success path, so an append failure is
    /// this recipient's failure outcome and the success counter (and with
    /// it the rotation index) does not advance.
    async fn attempt(
        &self,
        row_index: usize,
        recipient: &Recipient,
        sent_count: usize,
    ) -> Result<DeliveryLogEntry, DeliveryError> {
        let selection = self.plan.select(recipient, sent_count)?;

        let template = CampaignUpdateTemplate::new(recipient.name.as_deref());
        let subject = template.subject(self.plan.subject_override(recipient, row_index));

        let email = OutgoingEmail {
            from: EmailAddress::new(&selection.from)?,
            to: EmailAddress::new(&recipient.address)?,
            subject: subject.clone(),
            html_body: template.render()?,
            plain_body: template.render_plain()?,
        };

        self.mailer.send(&selection.credential, &email).await?;

        let entry = DeliveryLogEntry {
            timestamp: Utc::now(),
            recipient: email.to.to_string(),
            sender: email.from.to_string(),
            subject,
        };

        self.log.record(&entry)?;

        Ok(entry)
    }
}
