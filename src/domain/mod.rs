//! Domain entities exposed by the clinic service layer.

pub mod appointment;
pub mod doctor;
pub mod procedure;
pub mod types;
