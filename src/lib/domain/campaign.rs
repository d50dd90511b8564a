//! Campaign dispatch domain

pub mod credentials;
pub mod dispatcher;
pub mod emails;
pub mod errors;
pub mod feed;
pub mod log;
pub mod models;
pub mod plan;
