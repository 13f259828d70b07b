use serde::{Deserialize, Serialize};

use crate::domain::types::{CrmNumber, DoctorEmail, DoctorId, DoctorName, trimmed_or_none};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: DoctorName,
    pub crm: CrmNumber,
    pub email: Option<DoctorEmail>,
    pub phone: Option<String>,
}

/// Payload used both for inserting a doctor and for fully replacing one.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewDoctor {
    pub name: DoctorName,
    pub crm: CrmNumber,
    pub email: Option<DoctorEmail>,
    pub phone: Option<String>,
}

impl NewDoctor {
    #[must_use]
    pub fn new(
        name: DoctorName,
        crm: CrmNumber,
        email: Option<DoctorEmail>,
        phone: Option<String>,
    ) -> Self {
        Self {
            name,
            crm,
            email,
            phone: trimmed_or_none(phone),
        }
    }
}

impl From<Doctor> for NewDoctor {
    fn from(doctor: Doctor) -> Self {
        Self {
            name: doctor.name,
            crm: doctor.crm,
            email: doctor.email,
            phone: doctor.phone,
        }
    }
}
