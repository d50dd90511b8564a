//! Value objects for the email delivery domain

pub mod email_address;
