//! HTTP handlers and the `/api` service registration.

use actix_web::web;

pub mod appointments;
pub mod doctors;
pub mod errors;
pub mod health;
pub mod procedures;

/// Registers every `/api` endpoint plus the JSON/path/query error handlers.
///
/// `/{resource}/page` must be registered before `/{resource}/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(errors::query_error_handler))
        .service(health::health)
        .service(
            web::scope("/api")
                .service(doctors::create_doctor)
                .service(doctors::list_doctors)
                .service(doctors::page_doctors)
                .service(doctors::doctor_specialties)
                .service(doctors::doctor_appointments)
                .service(doctors::get_doctor)
                .service(doctors::update_doctor)
                .service(doctors::delete_doctor)
                .service(procedures::create_procedure)
                .service(procedures::list_procedures)
                .service(procedures::page_procedures)
                .service(procedures::get_procedure)
                .service(procedures::update_procedure)
                .service(procedures::delete_procedure)
                .service(appointments::create_appointment)
                .service(appointments::list_appointments)
                .service(appointments::page_appointments)
                .service(appointments::get_appointment)
                .service(appointments::update_appointment)
                .service(appointments::delete_appointment),
        );
}
