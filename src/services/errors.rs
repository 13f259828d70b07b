use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Errors returned by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An id-keyed lookup required an entity that does not exist.
    #[error("{subject}! Id: {id}, Tipo: {entity}")]
    NotFound {
        subject: &'static str,
        entity: &'static str,
        id: i32,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn doctor_not_found(id: i32) -> Self {
        ServiceError::NotFound {
            subject: "Médico não encontrado",
            entity: "Medico",
            id,
        }
    }

    pub fn procedure_not_found(id: i32) -> Self {
        ServiceError::NotFound {
            subject: "Procedimento não encontrado",
            entity: "Procedimento",
            id,
        }
    }

    /// Reported by the doctor's `especialidades` lookup.
    pub fn specialty_not_found(id: i32) -> Self {
        ServiceError::NotFound {
            subject: "Especialidade não encontrada",
            entity: "Procedimento",
            id,
        }
    }

    pub fn appointment_not_found(id: i32) -> Self {
        ServiceError::NotFound {
            subject: "Consulta não encontrada",
            entity: "Consulta",
            id,
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(val: ValidationErrors) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
