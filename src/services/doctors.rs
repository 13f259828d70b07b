//! Services backing the `/api/medicos` endpoints.

use validator::Validate;

use crate::domain::doctor::{Doctor, NewDoctor};
use crate::domain::types::DoctorId;
use crate::dto::appointment::AppointmentDto;
use crate::dto::doctor::DoctorDto;
use crate::dto::page::PageParams;
use crate::dto::procedure::ProcedureDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{DoctorReader, DoctorWriter};
use crate::services::{ServiceError, ServiceResult};

pub const SORT_PROPERTY: &str = "nome";

/// Inserts the doctor, or replaces every column when `id` names an existing one.
pub fn save_doctor<R>(repo: &R, id: Option<DoctorId>, doctor: &NewDoctor) -> ServiceResult<Doctor>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    if let Some(id) = id {
        if repo.get_doctor_by_id(id)?.is_some() {
            return Ok(repo.replace_doctor(id, doctor)?);
        }
    }

    Ok(repo.create_doctor(doctor)?)
}

pub fn find_doctor_by_id<R>(repo: &R, id: DoctorId) -> ServiceResult<Option<Doctor>>
where
    R: DoctorReader + ?Sized,
{
    repo.get_doctor_by_id(id).map_err(ServiceError::from)
}

pub fn list_doctors<R>(repo: &R) -> ServiceResult<Vec<Doctor>>
where
    R: DoctorReader + ?Sized,
{
    repo.list_doctors().map_err(ServiceError::from)
}

pub fn list_doctors_page<R>(repo: &R, request: PageRequest) -> ServiceResult<Page<Doctor>>
where
    R: DoctorReader + ?Sized,
{
    let (total, items) = repo.list_doctors_page(request)?;
    Ok(Page::new(items, request, total, SORT_PROPERTY))
}

pub fn delete_doctor<R>(repo: &R, id: DoctorId) -> ServiceResult<()>
where
    R: DoctorWriter + ?Sized,
{
    repo.delete_doctor(id).map_err(ServiceError::from)
}

/// Maps a doctor together with its procedures and appointments.
pub fn doctor_to_dto<R>(repo: &R, doctor: Doctor) -> ServiceResult<DoctorDto>
where
    R: DoctorReader + ?Sized,
{
    let procedures = repo.list_doctor_procedures(doctor.id)?;
    let appointments = repo.list_doctor_appointments(doctor.id)?;
    Ok(DoctorDto::with_relations(doctor, procedures, appointments))
}

fn existing_doctor<R>(repo: &R, id: i32) -> ServiceResult<Doctor>
where
    R: DoctorReader + ?Sized,
{
    existing_doctor_or(repo, id, ServiceError::doctor_not_found)
}

/// Looks the doctor up, reporting absence with `not_found`.
fn existing_doctor_or<R>(
    repo: &R,
    id: i32,
    not_found: fn(i32) -> ServiceError,
) -> ServiceResult<Doctor>
where
    R: DoctorReader + ?Sized,
{
    let doctor_id = DoctorId::new(id).map_err(|_| not_found(id))?;
    find_doctor_by_id(repo, doctor_id)?.ok_or_else(|| not_found(id))
}

pub fn create_doctor<R>(repo: &R, dto: DoctorDto) -> ServiceResult<DoctorDto>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    dto.validate()?;

    let id = dto.id.map(DoctorId::new).transpose()?;
    let new_doctor = NewDoctor::try_from(dto)?;

    let doctor = save_doctor(repo, id, &new_doctor)?;
    log::info!("Saved doctor {}", doctor.id);

    doctor_to_dto(repo, doctor)
}

pub fn update_doctor<R>(repo: &R, id: i32, dto: DoctorDto) -> ServiceResult<()>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    dto.validate()?;

    let doctor = existing_doctor(repo, id)?;
    let new_doctor = NewDoctor::try_from(dto)?;
    save_doctor(repo, Some(doctor.id), &new_doctor)?;

    Ok(())
}

pub fn get_doctor<R>(repo: &R, id: i32) -> ServiceResult<DoctorDto>
where
    R: DoctorReader + ?Sized,
{
    let doctor = existing_doctor(repo, id)?;
    doctor_to_dto(repo, doctor)
}

/// Deletes the doctor; its appointments go with it and its procedures are unassigned.
pub fn remove_doctor<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    let doctor = existing_doctor(repo, id)?;
    delete_doctor(repo, doctor.id)?;
    log::info!("Deleted doctor {}", doctor.id);

    Ok(())
}

pub fn list_doctor_dtos<R>(repo: &R) -> ServiceResult<Vec<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    list_doctors(repo)?
        .into_iter()
        .map(|doctor| doctor_to_dto(repo, doctor))
        .collect()
}

pub fn page_doctor_dtos<R>(repo: &R, params: PageParams) -> ServiceResult<Page<DoctorDto>>
where
    R: DoctorReader + ?Sized,
{
    params.validate()?;
    list_doctors_page(repo, params.into_request())?.try_map(|doctor| doctor_to_dto(repo, doctor))
}

/// The procedures ("especialidades") offered by the doctor.
pub fn doctor_specialties<R>(repo: &R, id: i32) -> ServiceResult<Vec<ProcedureDto>>
where
    R: DoctorReader + ?Sized,
{
    let doctor = existing_doctor_or(repo, id, ServiceError::specialty_not_found)?;
    Ok(repo
        .list_doctor_procedures(doctor.id)?
        .into_iter()
        .map(ProcedureDto::from)
        .collect())
}

pub fn doctor_appointments<R>(repo: &R, id: i32) -> ServiceResult<Vec<AppointmentDto>>
where
    R: DoctorReader + ?Sized,
{
    let doctor = existing_doctor_or(repo, id, ServiceError::appointment_not_found)?;
    Ok(repo
        .list_doctor_appointments(doctor.id)?
        .into_iter()
        .map(AppointmentDto::from)
        .collect())
}
