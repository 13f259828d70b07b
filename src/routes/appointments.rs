use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::appointment::AppointmentDto;
use crate::dto::page::PageParams;
use crate::repository::DieselRepository;
use crate::routes::errors::ApiResult;
use crate::services::appointments as service;

#[post("/consultas")]
pub async fn create_appointment(
    repo: web::Data<DieselRepository>,
    payload: web::Json<AppointmentDto>,
) -> ApiResult<HttpResponse> {
    let created = service::create_appointment(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/consultas/{id}")]
pub async fn update_appointment(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    payload: web::Json<AppointmentDto>,
) -> ApiResult<HttpResponse> {
    service::update_appointment(repo.get_ref(), id.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/consultas")]
pub async fn list_appointments(repo: web::Data<DieselRepository>) -> ApiResult<HttpResponse> {
    let appointments = service::list_appointment_dtos(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(appointments))
}

#[get("/consultas/page")]
pub async fn page_appointments(
    repo: web::Data<DieselRepository>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let page = service::page_appointment_dtos(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/consultas/{id}")]
pub async fn get_appointment(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let appointment = service::get_appointment(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[delete("/consultas/{id}")]
pub async fn delete_appointment(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    service::remove_appointment(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
