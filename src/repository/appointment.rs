//! Repository implementation for appointments.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        appointment::{Appointment, NewAppointment},
        types::AppointmentId,
    },
    models::appointment::{Appointment as DbAppointment, NewAppointment as DbNewAppointment},
    pagination::{PageRequest, SortDirection},
    repository::{
        AppointmentReader, AppointmentWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl AppointmentReader for DieselRepository {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        let db_appointment = consultas::table
            .find(id.get())
            .first::<DbAppointment>(&mut conn)
            .optional()?;

        db_appointment
            .map(|appointment| Appointment::try_from(appointment).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        consultas::table
            .order(consultas::id.asc())
            .load::<DbAppointment>(&mut conn)?
            .into_iter()
            .map(|appointment| Appointment::try_from(appointment).map_err(RepositoryError::from))
            .collect()
    }

    fn list_appointments_page(
        &self,
        request: PageRequest,
    ) -> RepositoryResult<(usize, Vec<Appointment>)> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;

        let total: i64 = consultas::table.count().get_result(&mut conn)?;

        // Appointments have no name of their own; the patient name takes its place.
        let mut query = consultas::table.into_boxed::<Sqlite>();
        query = match request.direction {
            SortDirection::Asc => query.order(consultas::paciente.asc()),
            SortDirection::Desc => query.order(consultas::paciente.desc()),
        };

        let items = query
            .then_order_by(consultas::id.asc())
            .limit(request.sql_limit())
            .offset(request.sql_offset())
            .load::<DbAppointment>(&mut conn)?
            .into_iter()
            .map(|appointment| Appointment::try_from(appointment).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }
}

impl AppointmentWriter for DieselRepository {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        let db_new_appointment: DbNewAppointment = new_appointment.into();

        let db_appointment = diesel::insert_into(consultas::table)
            .values(&db_new_appointment)
            .get_result::<DbAppointment>(&mut conn)?;

        Appointment::try_from(db_appointment).map_err(RepositoryError::from)
    }

    fn replace_appointment(
        &self,
        id: AppointmentId,
        appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        let changes: DbNewAppointment = appointment.into();

        let db_appointment = diesel::update(consultas::table.find(id.get()))
            .set(&changes)
            .get_result::<DbAppointment>(&mut conn)?;

        Appointment::try_from(db_appointment).map_err(RepositoryError::from)
    }

    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        diesel::delete(consultas::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
