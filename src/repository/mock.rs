//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::appointment::{Appointment, NewAppointment};
use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::procedure::{NewProcedure, Procedure};
use crate::domain::types::{AppointmentId, DoctorId, ProcedureId};
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AppointmentReader, AppointmentWriter, DoctorReader, DoctorWriter, ProcedureReader,
    ProcedureWriter,
};

mock! {
    pub Repository {}

    impl DoctorReader for Repository {
        fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
        fn list_doctors(&self) -> RepositoryResult<Vec<Doctor>>;
        fn list_doctors_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Doctor>)>;
        fn list_doctor_procedures(&self, id: DoctorId) -> RepositoryResult<Vec<Procedure>>;
        fn list_doctor_appointments(&self, id: DoctorId) -> RepositoryResult<Vec<Appointment>>;
    }

    impl DoctorWriter for Repository {
        fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
        fn replace_doctor(&self, id: DoctorId, doctor: &NewDoctor) -> RepositoryResult<Doctor>;
        fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<()>;
    }

    impl ProcedureReader for Repository {
        fn get_procedure_by_id(&self, id: ProcedureId) -> RepositoryResult<Option<Procedure>>;
        fn list_procedures(&self) -> RepositoryResult<Vec<Procedure>>;
        fn list_procedures_page(
            &self,
            request: PageRequest,
        ) -> RepositoryResult<(usize, Vec<Procedure>)>;
    }

    impl ProcedureWriter for Repository {
        fn create_procedure(&self, new_procedure: &NewProcedure) -> RepositoryResult<Procedure>;
        fn replace_procedure(
            &self,
            id: ProcedureId,
            procedure: &NewProcedure,
        ) -> RepositoryResult<Procedure>;
        fn delete_procedure(&self, id: ProcedureId) -> RepositoryResult<()>;
    }

    impl AppointmentReader for Repository {
        fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
        fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
        fn list_appointments_page(
            &self,
            request: PageRequest,
        ) -> RepositoryResult<(usize, Vec<Appointment>)>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(
            &self,
            new_appointment: &NewAppointment,
        ) -> RepositoryResult<Appointment>;
        fn replace_appointment(
            &self,
            id: AppointmentId,
            appointment: &NewAppointment,
        ) -> RepositoryResult<Appointment>;
        fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
    }
}
