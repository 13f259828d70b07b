use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, DoctorId, PatientName, trimmed_or_none};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor_id: DoctorId,
    pub patient: PatientName,
    pub scheduled_at: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub doctor_id: DoctorId,
    pub patient: PatientName,
    pub scheduled_at: NaiveDateTime,
    pub notes: Option<String>,
}

impl NewAppointment {
    #[must_use]
    pub fn new(
        doctor_id: DoctorId,
        patient: PatientName,
        scheduled_at: NaiveDateTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            doctor_id,
            patient,
            scheduled_at,
            notes: trimmed_or_none(notes),
        }
    }
}

impl From<Appointment> for NewAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            doctor_id: appointment.doctor_id,
            patient: appointment.patient,
            scheduled_at: appointment.scheduled_at,
            notes: appointment.notes,
        }
    }
}
