use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::appointment::{Appointment, NewAppointment};
use crate::domain::types::{DoctorId, PatientName, TypeConstraintError};

/// Wire representation of an appointment (`/api/consultas`).
#[derive(Clone, Debug, Serialize, Deserialize, Validate, PartialEq)]
pub struct AppointmentDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(range(min = 1))]
    pub medico: i32,
    #[validate(length(min = 1, max = 255))]
    pub paciente: String,
    /// Scheduled date and time, e.g. `2024-05-10T14:30:00`.
    pub data: NaiveDateTime,
    #[serde(default)]
    pub observacao: Option<String>,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: Some(appointment.id.get()),
            medico: appointment.doctor_id.get(),
            paciente: appointment.patient.into_inner(),
            data: appointment.scheduled_at,
            observacao: appointment.notes,
        }
    }
}

impl TryFrom<AppointmentDto> for NewAppointment {
    type Error = TypeConstraintError;

    fn try_from(dto: AppointmentDto) -> Result<Self, Self::Error> {
        Ok(NewAppointment::new(
            DoctorId::new(dto.medico)?,
            PatientName::new(dto.paciente)?,
            dto.data,
            dto.observacao,
        ))
    }
}
