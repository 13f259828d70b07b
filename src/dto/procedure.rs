use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::procedure::{NewProcedure, Procedure};
use crate::domain::types::{
    AppointmentId, DoctorId, Price, ProcedureName, TypeConstraintError,
};

/// Wire representation of a procedure (`/api/procedimentos`).
#[derive(Clone, Debug, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProcedureDto {
    #[serde(default)]
    pub id: Option<i32>,
    /// Doctor offering the procedure.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub medico: Option<i32>,
    /// Appointment the procedure belongs to.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub consulta: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[validate(range(min = 0.0))]
    pub preco: f64,
}

impl From<Procedure> for ProcedureDto {
    fn from(procedure: Procedure) -> Self {
        Self {
            id: Some(procedure.id.get()),
            medico: procedure.doctor_id.map(DoctorId::get),
            consulta: procedure.appointment_id.map(AppointmentId::get),
            nome: procedure.name.into_inner(),
            descricao: procedure.description,
            preco: procedure.price.get(),
        }
    }
}

impl TryFrom<ProcedureDto> for NewProcedure {
    type Error = TypeConstraintError;

    fn try_from(dto: ProcedureDto) -> Result<Self, Self::Error> {
        Ok(NewProcedure::new(
            dto.medico.map(DoctorId::new).transpose()?,
            dto.consulta.map(AppointmentId::new).transpose()?,
            ProcedureName::new(dto.nome)?,
            dto.descricao,
            Price::new(dto.preco)?,
        ))
    }
}
