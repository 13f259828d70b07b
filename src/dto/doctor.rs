use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::appointment::Appointment;
use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::procedure::Procedure;
use crate::domain::types::{CrmNumber, DoctorEmail, DoctorName, TypeConstraintError};
use crate::dto::appointment::AppointmentDto;
use crate::dto::procedure::ProcedureDto;

/// Wire representation of a doctor (`/api/medicos`).
///
/// `especialidades` and `consultas` are read-only views of the procedures and
/// appointments referencing the doctor; they are ignored when saving.
#[derive(Clone, Debug, Serialize, Deserialize, Validate, PartialEq)]
pub struct DoctorDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub nome: String,
    #[validate(length(min = 1, max = 32))]
    pub crm: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub especialidades: Vec<ProcedureDto>,
    #[serde(default)]
    pub consultas: Vec<AppointmentDto>,
}

impl DoctorDto {
    /// Maps the doctor along with its procedures and appointments.
    pub fn with_relations(
        doctor: Doctor,
        procedures: Vec<Procedure>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            especialidades: procedures.into_iter().map(ProcedureDto::from).collect(),
            consultas: appointments.into_iter().map(AppointmentDto::from).collect(),
            ..Self::from(doctor)
        }
    }
}

impl From<Doctor> for DoctorDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: Some(doctor.id.get()),
            nome: doctor.name.into_inner(),
            crm: doctor.crm.into_inner(),
            email: doctor.email.map(DoctorEmail::into_inner),
            telefone: doctor.phone,
            especialidades: Vec::new(),
            consultas: Vec::new(),
        }
    }
}

impl TryFrom<DoctorDto> for NewDoctor {
    type Error = TypeConstraintError;

    fn try_from(dto: DoctorDto) -> Result<Self, Self::Error> {
        let email = dto
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .map(DoctorEmail::new)
            .transpose()?;

        Ok(NewDoctor::new(
            DoctorName::new(dto.nome)?,
            CrmNumber::new(dto.crm)?,
            email,
            dto.telefone,
        ))
    }
}
