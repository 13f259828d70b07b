//! Diesel models representing doctors.

use diesel::prelude::*;

use crate::domain::doctor::{Doctor as DomainDoctor, NewDoctor as DomainNewDoctor};
use crate::domain::types::{CrmNumber, DoctorEmail, DoctorId, DoctorName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::medicos)]
/// Diesel model for [`crate::domain::doctor::Doctor`].
pub struct Doctor {
    pub id: i32,
    pub nome: String,
    pub crm: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::medicos)]
#[diesel(treat_none_as_null = true)]
/// Insertable form of [`Doctor`], also used as the full-replace changeset.
pub struct NewDoctor<'a> {
    pub nome: &'a str,
    pub crm: &'a str,
    pub email: Option<&'a str>,
    pub telefone: Option<&'a str>,
}

impl TryFrom<Doctor> for DomainDoctor {
    type Error = TypeConstraintError;

    fn try_from(doctor: Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(doctor.id)?,
            name: DoctorName::new(doctor.nome)?,
            crm: CrmNumber::new(doctor.crm)?,
            email: doctor.email.map(DoctorEmail::new).transpose()?,
            phone: doctor.telefone,
        })
    }
}

impl<'a> From<&'a DomainNewDoctor> for NewDoctor<'a> {
    fn from(doctor: &'a DomainNewDoctor) -> Self {
        Self {
            nome: doctor.name.as_str(),
            crm: doctor.crm.as_str(),
            email: doctor.email.as_ref().map(DoctorEmail::as_str),
            telefone: doctor.phone.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_doctor() {
        let domain = DomainNewDoctor::new(
            DoctorName::new("Ana Souza").expect("valid name"),
            CrmNumber::new("CRM-SP 12345").expect("valid crm"),
            Some(DoctorEmail::new("ana@clinica.com").expect("valid email")),
            Some(" 11 99999-0000 ".to_string()),
        );
        let row: NewDoctor = (&domain).into();
        assert_eq!(row.nome, "Ana Souza");
        assert_eq!(row.crm, "CRM-SP 12345");
        assert_eq!(row.email, Some("ana@clinica.com"));
        assert_eq!(row.telefone, Some("11 99999-0000"));
    }

    #[test]
    fn doctor_row_into_domain() {
        let db = Doctor {
            id: 3,
            nome: "Bruno".into(),
            crm: "CRM-RJ 1".into(),
            email: None,
            telefone: None,
        };
        let domain = DomainDoctor::try_from(db).expect("valid doctor");
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Bruno");
        assert!(domain.email.is_none());
    }

    #[test]
    fn invalid_row_is_rejected() {
        let db = Doctor {
            id: 0,
            nome: "Bruno".into(),
            crm: "CRM".into(),
            email: None,
            telefone: None,
        };
        assert_eq!(
            DomainDoctor::try_from(db),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
