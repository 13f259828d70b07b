use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::page::PageParams;
use crate::dto::procedure::ProcedureDto;
use crate::repository::DieselRepository;
use crate::routes::errors::ApiResult;
use crate::services::procedures as service;

#[post("/procedimentos")]
pub async fn create_procedure(
    repo: web::Data<DieselRepository>,
    payload: web::Json<ProcedureDto>,
) -> ApiResult<HttpResponse> {
    let created = service::create_procedure(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/procedimentos/{id}")]
pub async fn update_procedure(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
    payload: web::Json<ProcedureDto>,
) -> ApiResult<HttpResponse> {
    service::update_procedure(repo.get_ref(), id.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/procedimentos")]
pub async fn list_procedures(repo: web::Data<DieselRepository>) -> ApiResult<HttpResponse> {
    let procedures = service::list_procedure_dtos(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(procedures))
}

#[get("/procedimentos/page")]
pub async fn page_procedures(
    repo: web::Data<DieselRepository>,
    params: web::Query<PageParams>,
) -> ApiResult<HttpResponse> {
    let page = service::page_procedure_dtos(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/procedimentos/{id}")]
pub async fn get_procedure(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let procedure = service::get_procedure(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(procedure))
}

#[delete("/procedimentos/{id}")]
pub async fn delete_procedure(
    repo: web::Data<DieselRepository>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    service::remove_procedure(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
