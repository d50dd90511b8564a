//! Email delivery domain

pub mod errors;
pub mod mailer;
pub mod message;
pub mod value_objects;
