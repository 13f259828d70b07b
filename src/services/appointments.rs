//! Services backing the `/api/consultas` endpoints.

use validator::Validate;

use crate::domain::appointment::{Appointment, NewAppointment};
use crate::domain::types::AppointmentId;
use crate::dto::appointment::AppointmentDto;
use crate::dto::page::PageParams;
use crate::pagination::{Page, PageRequest};
use crate::repository::{AppointmentReader, AppointmentWriter};
use crate::services::{ServiceError, ServiceResult};

/// Appointments are paged by patient name.
pub const SORT_PROPERTY: &str = "paciente";

/// Inserts the appointment, or replaces every column when `id` names an existing one.
pub fn save_appointment<R>(
    repo: &R,
    id: Option<AppointmentId>,
    appointment: &NewAppointment,
) -> ServiceResult<Appointment>
where
    R: AppointmentReader + AppointmentWriter + ?Sized,
{
    if let Some(id) = id {
        if repo.get_appointment_by_id(id)?.is_some() {
            return Ok(repo.replace_appointment(id, appointment)?);
        }
    }

    Ok(repo.create_appointment(appointment)?)
}

pub fn find_appointment_by_id<R>(
    repo: &R,
    id: AppointmentId,
) -> ServiceResult<Option<Appointment>>
where
    R: AppointmentReader + ?Sized,
{
    repo.get_appointment_by_id(id).map_err(ServiceError::from)
}

pub fn list_appointments<R>(repo: &R) -> ServiceResult<Vec<Appointment>>
where
    R: AppointmentReader + ?Sized,
{
    repo.list_appointments().map_err(ServiceError::from)
}

pub fn list_appointments_page<R>(
    repo: &R,
    request: PageRequest,
) -> ServiceResult<Page<Appointment>>
where
    R: AppointmentReader + ?Sized,
{
    let (total, items) = repo.list_appointments_page(request)?;
    Ok(Page::new(items, request, total, SORT_PROPERTY))
}

pub fn delete_appointment<R>(repo: &R, id: AppointmentId) -> ServiceResult<()>
where
    R: AppointmentWriter + ?Sized,
{
    repo.delete_appointment(id).map_err(ServiceError::from)
}

pub fn create_appointment<R>(repo: &R, dto: AppointmentDto) -> ServiceResult<AppointmentDto>
where
    R: AppointmentReader + AppointmentWriter + ?Sized,
{
    dto.validate()?;

    let id = dto.id.map(AppointmentId::new).transpose()?;
    let new_appointment = NewAppointment::try_from(dto)?;

    let appointment = save_appointment(repo, id, &new_appointment)?;
    log::info!(
        "Saved appointment {} for doctor {}",
        appointment.id,
        appointment.doctor_id
    );

    Ok(appointment.into())
}

pub fn update_appointment<R>(repo: &R, id: i32, dto: AppointmentDto) -> ServiceResult<()>
where
    R: AppointmentReader + AppointmentWriter + ?Sized,
{
    dto.validate()?;

    let appointment_id =
        AppointmentId::new(id).map_err(|_| ServiceError::appointment_not_found(id))?;

    if find_appointment_by_id(repo, appointment_id)?.is_none() {
        return Err(ServiceError::appointment_not_found(id));
    }

    let new_appointment = NewAppointment::try_from(dto)?;
    save_appointment(repo, Some(appointment_id), &new_appointment)?;

    Ok(())
}

pub fn get_appointment<R>(repo: &R, id: i32) -> ServiceResult<AppointmentDto>
where
    R: AppointmentReader + ?Sized,
{
    let appointment_id =
        AppointmentId::new(id).map_err(|_| ServiceError::appointment_not_found(id))?;

    find_appointment_by_id(repo, appointment_id)?
        .map(AppointmentDto::from)
        .ok_or_else(|| ServiceError::appointment_not_found(id))
}

pub fn remove_appointment<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: AppointmentReader + AppointmentWriter + ?Sized,
{
    let appointment_id =
        AppointmentId::new(id).map_err(|_| ServiceError::appointment_not_found(id))?;

    let appointment = find_appointment_by_id(repo, appointment_id)?
        .ok_or_else(|| ServiceError::appointment_not_found(id))?;

    delete_appointment(repo, appointment.id)?;
    log::info!("Deleted appointment {}", appointment.id);

    Ok(())
}

pub fn list_appointment_dtos<R>(repo: &R) -> ServiceResult<Vec<AppointmentDto>>
where
    R: AppointmentReader + ?Sized,
{
    Ok(list_appointments(repo)?
        .into_iter()
        .map(AppointmentDto::from)
        .collect())
}

pub fn page_appointment_dtos<R>(
    repo: &R,
    params: PageParams,
) -> ServiceResult<Page<AppointmentDto>>
where
    R: AppointmentReader + ?Sized,
{
    params.validate()?;
    Ok(list_appointments_page(repo, params.into_request())?.map(AppointmentDto::from))
}
