//! Domain logic

pub mod campaign;
pub mod comms;
