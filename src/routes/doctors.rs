use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::doctor::DoctorDto;
use crate::dto::page::PageParams;
use crate::repository::DieselRepository;
use crate::routes::errors::ApiResult;
use crate::services::doctors as service;

#[post("/medicos")]
pub async fn create_doctor(
    repo: web::Data<DieselRepository>,
    payload: web::Json<DoctorDto>,
) -> ApiResult<HttpResponse> {
    let created = service::create_doctor(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/medicos/{id}")]
pub async fn update_doctor(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    payload: web::Json<DoctorDto>,
) -> ApiResult<HttpResponse> {
    service::update_doctor(repo.get_ref(), id.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/medicos")]
pub async fn list_doctors(repo: web::Data<DieselRepository>) -> ApiResult<HttpResponse> {
    let doctors = service::list_doctor_dtos(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(doctors))
}

#[get("/medicos/page")]
pub async fn page_doctors(
    repo: web::Data<DieselRepository>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let page = service::page_doctor_dtos(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/medicos/{id}")]
pub async fn get_doctor(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let doctor = service::get_doctor(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(doctor))
}

#[delete("/medicos/{id}")]
pub async fn delete_doctor(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    service::remove_doctor(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/medicos/{id}/especialidades")]
pub async fn doctor_specialties(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let specialties = service::doctor_specialties(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(specialties))
}

#[get("/medicos/{id}/consultas")]
pub async fn doctor_appointments(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let appointments = service::doctor_appointments(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(appointments))
}
