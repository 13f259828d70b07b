//! Diesel row models and the server configuration model.

pub mod appointment;
pub mod config;
pub mod doctor;
pub mod procedure;
