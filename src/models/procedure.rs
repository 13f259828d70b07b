//! Diesel models representing procedures.

use diesel::prelude::*;

use crate::domain::procedure::{NewProcedure as DomainNewProcedure, Procedure as DomainProcedure};
use crate::domain::types::{
    AppointmentId, DoctorId, Price, ProcedureId, ProcedureName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::procedimentos)]
/// Diesel model for [`crate::domain::procedure::Procedure`].
pub struct Procedure {
    pub id: i32,
    pub medico_id: Option<i32>,
    pub consulta_id: Option<i32>,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: f64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::procedimentos)]
#[diesel(treat_none_as_null = true)]
/// Insertable form of [`Procedure`], also used as the full-replace changeset.
pub struct NewProcedure<'a> {
    pub medico_id: Option<i32>,
    pub consulta_id: Option<i32>,
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub preco: f64,
}

impl TryFrom<Procedure> for DomainProcedure {
    type Error = TypeConstraintError;

    fn try_from(procedure: Procedure) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProcedureId::try_from(procedure.id)?,
            doctor_id: procedure.medico_id.map(DoctorId::try_from).transpose()?,
            appointment_id: procedure
                .consulta_id
                .map(AppointmentId::try_from)
                .transpose()?,
            name: ProcedureName::new(procedure.nome)?,
            description: procedure.descricao,
            price: Price::new(procedure.preco)?,
        })
    }
}

impl<'a> From<&'a DomainNewProcedure> for NewProcedure<'a> {
    fn from(procedure: &'a DomainNewProcedure) -> Self {
        Self {
            medico_id: procedure.doctor_id.map(DoctorId::get),
            consulta_id: procedure.appointment_id.map(AppointmentId::get),
            nome: procedure.name.as_str(),
            descricao: procedure.description.as_deref(),
            preco: procedure.price.get(),
        }
    }
}
