use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, DoctorId, Price, ProcedureId, ProcedureName, trimmed_or_none};

/// A billable procedure, optionally offered by a doctor and optionally
/// attached to an appointment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Procedure {
    pub id: ProcedureId,
    pub doctor_id: Option<DoctorId>,
    pub appointment_id: Option<AppointmentId>,
    pub name: ProcedureName,
    pub description: Option<String>,
    pub price: Price,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewProcedure {
    pub doctor_id: Option<DoctorId>,
    pub appointment_id: Option<AppointmentId>,
    pub name: ProcedureName,
    pub description: Option<String>,
    pub price: Price,
}

impl NewProcedure {
    #[must_use]
    pub fn new(
        doctor_id: Option<DoctorId>,
        appointment_id: Option<AppointmentId>,
        name: ProcedureName,
        description: Option<String>,
        price: Price,
    ) -> Self {
        Self {
            doctor_id,
            appointment_id,
            name,
            description: trimmed_or_none(description),
            price,
        }
    }
}

impl From<Procedure> for NewProcedure {
    fn from(procedure: Procedure) -> Self {
        Self {
            doctor_id: procedure.doctor_id,
            appointment_id: procedure.appointment_id,
            name: procedure.name,
            description: procedure.description,
            price: procedure.price,
        }
    }
}
