//! Delivery log implementations

pub mod file;
