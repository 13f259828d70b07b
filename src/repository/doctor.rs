//! Repository implementation for doctors.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        appointment::Appointment,
        doctor::{Doctor, NewDoctor},
        procedure::Procedure,
        types::DoctorId,
    },
    models::{
        appointment::Appointment as DbAppointment,
        doctor::{Doctor as DbDoctor, NewDoctor as DbNewDoctor},
        procedure::Procedure as DbProcedure,
    },
    pagination::{PageRequest, SortDirection},
    repository::{
        DieselRepository, DoctorReader, DoctorWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl DoctorReader for DieselRepository {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;
        let db_doctor = medicos::table
            .find(id.get())
            .first::<DbDoctor>(&mut conn)
            .optional()?;

        db_doctor
            .map(|doctor| Doctor::try_from(doctor).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;
        medicos::table
            .order(medicos::id.asc())
            .load::<DbDoctor>(&mut conn)?
            .into_iter()
            .map(|doctor| Doctor::try_from(doctor).map_err(RepositoryError::from))
            .collect()
    }

    fn list_doctors_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Doctor>)> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;

        let total: i64 = medicos::table.count().get_result(&mut conn)?;

        let mut query = medicos::table.into_boxed::<Sqlite>();
        query = match request.direction {
            SortDirection::Asc => query.order(medicos::nome.asc()),
            SortDirection::Desc => query.order(medicos::nome.desc()),
        };

        let items = query
            .then_order_by(medicos::id.asc())
            .limit(request.sql_limit())
            .offset(request.sql_offset())
            .load::<DbDoctor>(&mut conn)?
            .into_iter()
            .map(|doctor| Doctor::try_from(doctor).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }

    fn list_doctor_procedures(&self, id: DoctorId) -> RepositoryResult<Vec<Procedure>> {
        use crate::schema::procedimentos;

        let mut conn = self.conn()?;
        procedimentos::table
            .filter(procedimentos::medico_id.eq(id.get()))
            .order(procedimentos::id.asc())
            .load::<DbProcedure>(&mut conn)?
            .into_iter()
            .map(|procedure| Procedure::try_from(procedure).map_err(RepositoryError::from))
            .collect()
    }

    fn list_doctor_appointments(&self, id: DoctorId) -> RepositoryResult<Vec<Appointment>> {
        use crate::schema::consultas;

        let mut conn = self.conn()?;
        consultas::table
            .filter(consultas::medico_id.eq(id.get()))
            .order((consultas::data.asc(), consultas::id.asc()))
            .load::<DbAppointment>(&mut conn)?
            .into_iter()
            .map(|appointment| Appointment::try_from(appointment).map_err(RepositoryError::from))
            .collect()
    }
}

impl DoctorWriter for DieselRepository {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;
        let db_new_doctor: DbNewDoctor = new_doctor.into();

        let db_doctor = diesel::insert_into(medicos::table)
            .values(&db_new_doctor)
            .get_result::<DbDoctor>(&mut conn)?;

        Doctor::try_from(db_doctor).map_err(RepositoryError::from)
    }

    fn replace_doctor(&self, id: DoctorId, doctor: &NewDoctor) -> RepositoryResult<Doctor> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;
        let changes: DbNewDoctor = doctor.into();

        let db_doctor = diesel::update(medicos::table.find(id.get()))
            .set(&changes)
            .get_result::<DbDoctor>(&mut conn)?;

        Doctor::try_from(db_doctor).map_err(RepositoryError::from)
    }

    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()> {
        use crate::schema::medicos;

        let mut conn = self.conn()?;
        diesel::delete(medicos::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
