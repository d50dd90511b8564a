//! Campaign email templates

pub mod campaign_update;
