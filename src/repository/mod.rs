use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        appointment::{Appointment, NewAppointment},
        doctor::{Doctor, NewDoctor},
        procedure::{NewProcedure, Procedure},
        types::{AppointmentId, DoctorId, ProcedureId},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod appointment;
pub mod doctor;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod procedure;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait DoctorReader {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
    fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>>;
    /// Returns the total number of doctors and the requested page ordered by name.
    fn list_doctors_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Doctor>)>;
    fn list_doctor_procedures(&self, id: DoctorId) -> RepositoryResult<Vec<Procedure>>;
    fn list_doctor_appointments(&self, id: DoctorId) -> RepositoryResult<Vec<Appointment>>;
}

pub trait DoctorWriter {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
    /// Overwrites every column of an existing doctor.
    fn replace_doctor(&self, id: DoctorId, doctor: &NewDoctor) -> RepositoryResult<Doctor>;
    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()>;
}

pub trait ProcedureReader {
    fn get_procedure_by_id(&self, id: ProcedureId) -> RepositoryResult<Option<Procedure>>;
    fn list_procedures(&self) -> RepositoryResult<Vec<Procedure>>;
    fn list_procedures_page(
        &self,
        request: PageRequest,
    ) -> RepositoryResult<(usize, Vec<Procedure>)>;
}

pub trait ProcedureWriter {
    fn create_procedure(&self, new_procedure: &NewProcedure) -> RepositoryResult<Procedure>;
    fn replace_procedure(
        &self,
        id: ProcedureId,
        procedure: &NewProcedure,
    ) -> RepositoryResult<Procedure>;
    fn delete_procedure(&self, id: ProcedureId) -> RepositoryResult<()>;
}

pub trait AppointmentReader {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
    fn list_appointments_page(
        &self,
        request: PageRequest,
    ) -> RepositoryResult<(usize, Vec<Appointment>)>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, new_appointment: &NewAppointment)
    -> RepositoryResult<Appointment>;
    fn replace_appointment(
        &self,
        id: AppointmentId,
        appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment>;
    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
}
