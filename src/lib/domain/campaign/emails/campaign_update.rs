//! Campaign update template

use anyhow::Result;
use askama::Template;

/// Substitute display name when a recipient row carries none
pub const DEFAULT_RECIPIENT_NAME: &str = "there";

/// The campaign email body, personalized with one display name
#[derive(Debug, Template)]
#[template(path = "emails/campaign_update.html")]
pub struct CampaignUpdateTemplate {
    /// Display name interpolated into the greeting
    pub name: String,
}

impl CampaignUpdateTemplate {
    /// Creates a new `CampaignUpdateTemplate`, falling back to
    /// [`DEFAULT_RECIPIENT_NAME`] when the name is absent or blank.
    pub fn new(name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_RECIPIENT_NAME);

        Self {
            name: name.to_string(),
        }
    }

    /// The subject line: the explicit one when present, else a generated
    /// default referencing the name.
    pub fn subject(&self, explicit: Option<&str>) -> String {
        match explicit.map(str::trim).filter(|subject| !subject.is_empty()) {
            Some(subject) => subject.to_string(),
            None => format!("Hey {name}, your weekly dispatch update", name = self.name),
        }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> Result<String> {
        Ok(format!(
            "Hi {name},\n\n\
            Your weekly dispatch update is ready. Reply with your ZIP code and \
            equipment type and we'll line up this week's loads.\n\n\
            — The Dispatch Desk",
            name = self.name
        ))
    }
}
