//! Service layer: entity persistence, DTO mapping and "not found" translation.

pub mod appointments;
pub mod doctors;
pub mod errors;
pub mod procedures;

pub use errors::{ServiceError, ServiceResult};
