//! Transfer objects exchanged with HTTP clients and their entity mappings.

pub mod appointment;
pub mod doctor;
pub mod page;
pub mod procedure;
