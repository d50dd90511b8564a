//! Campaign models

pub mod recipient;
