//! Diesel models representing appointments.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::appointment::{
    Appointment as DomainAppointment, NewAppointment as DomainNewAppointment,
};
use crate::domain::types::{AppointmentId, DoctorId, PatientName, TypeConstraintError};
use crate::models::doctor::Doctor;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Doctor, foreign_key = medico_id))]
#[diesel(table_name = crate::schema::consultas)]
/// Diesel model for [`crate::domain::appointment::Appointment`].
pub struct Appointment {
    pub id: i32,
    pub medico_id: i32,
    pub paciente: String,
    pub data: NaiveDateTime,
    pub observacao: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::consultas)]
#[diesel(treat_none_as_null = true)]
/// Insertable form of [`Appointment`], also used as the full-replace changeset.
pub struct NewAppointment<'a> {
    pub medico_id: i32,
    pub paciente: &'a str,
    pub data: NaiveDateTime,
    pub observacao: Option<&'a str>,
}

impl TryFrom<Appointment> for DomainAppointment {
    type Error = TypeConstraintError;

    fn try_from(appointment: Appointment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AppointmentId::try_from(appointment.id)?,
            doctor_id: DoctorId::try_from(appointment.medico_id)?,
            patient: PatientName::new(appointment.paciente)?,
            scheduled_at: appointment.data,
            notes: appointment.observacao,
        })
    }
}

impl<'a> From<&'a DomainNewAppointment> for NewAppointment<'a> {
    fn from(appointment: &'a DomainNewAppointment) -> Self {
        Self {
            medico_id: appointment.doctor_id.get(),
            paciente: appointment.patient.as_str(),
            data: appointment.scheduled_at,
            observacao: appointment.notes.as_deref(),
        }
    }
}
