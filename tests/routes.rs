use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use clinica_api::repository::DieselRepository;
use clinica_api::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn procedure_lifecycle() {
    let test_db = common::TestDb::new("procedure_lifecycle.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/procedimentos")
        .set_json(json!({ "nome": "Consulta", "preco": 150.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(created["nome"], "Consulta");
    assert_eq!(created["preco"], 150.0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/procedimentos/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/procedimentos/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/procedimentos/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(
        body["message"],
        format!("Procedimento não encontrado! Id: {id}, Tipo: Procedimento")
    );
}

#[actix_web::test]
async fn put_replaces_or_reports_missing() {
    let test_db = common::TestDb::new("put_replaces_or_reports_missing.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/medicos/7")
        .set_json(json!({ "nome": "Ana", "crm": "CRM-SP 1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Médico não encontrado! Id: 7, Tipo: Medico");

    let req = test::TestRequest::post()
        .uri("/api/medicos")
        .set_json(json!({ "nome": "Ana", "crm": "CRM-SP 1", "email": "ana@clinica.com" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("generated id");

    let req = test::TestRequest::put()
        .uri(&format!("/api/medicos/{id}"))
        .set_json(json!({ "id": 999, "nome": "Ana Souza", "crm": "CRM-SP 1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/medicos/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["nome"], "Ana Souza");
    assert_eq!(fetched["email"], Value::Null);

    let req = test::TestRequest::get().uri("/api/medicos").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn page_endpoint_sorts_and_slices() {
    let test_db = common::TestDb::new("page_endpoint_sorts_and_slices.db");
    let app = init_app!(test_db);

    for i in 0..25 {
        let req = test::TestRequest::post()
            .uri("/api/procedimentos")
            .set_json(json!({ "nome": format!("Exame {i:02}"), "preco": 10.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/procedimentos/page")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 25);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["size"], 10);
    assert_eq!(page["content"].as_array().map(Vec::len), Some(10));
    assert_eq!(page["content"][0]["nome"], "Exame 00");
    assert_eq!(page["first"], true);

    let req = test::TestRequest::get()
        .uri("/api/procedimentos/page?page=2&limit=10")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["content"].as_array().map(Vec::len), Some(5));
    assert_eq!(page["last"], true);

    let req = test::TestRequest::get()
        .uri("/api/procedimentos/page?direction=DeSc")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["content"][0]["nome"], "Exame 24");
    assert_eq!(page["sort"]["direction"], "DESC");

    let req = test::TestRequest::get()
        .uri("/api/procedimentos/page?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn page_index_bounds() {
    let test_db = common::TestDb::new("page_index_bounds.db");
    let app = init_app!(test_db);

    for nome in ["Exame A", "Exame B", "Exame C"] {
        let req = test::TestRequest::post()
            .uri("/api/procedimentos")
            .set_json(json!({ "nome": nome, "preco": 10.0 }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/procedimentos/page?page=1000&limit=10")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["number"], 1000);
    assert_eq!(page["content"], json!([]));
    assert_eq!(page["empty"], true);
    assert_eq!(page["last"], true);

    for uri in [
        "/api/procedimentos/page?page=18446744073709551615",
        "/api/procedimentos/page?page=1000000000000000000&limit=10",
        "/api/medicos/page?page=18446744073709551615",
        "/api/consultas/page?page=18446744073709551615",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }
}

#[actix_web::test]
async fn appointment_lifecycle() {
    let test_db = common::TestDb::new("appointment_lifecycle.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/medicos")
        .set_json(json!({ "nome": "Ana", "crm": "CRM-SP 1" }))
        .to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;
    let doctor_id = doctor["id"].as_i64().expect("generated id");

    let req = test::TestRequest::post()
        .uri("/api/consultas")
        .set_json(json!({
            "medico": doctor_id,
            "paciente": "Carla",
            "data": "2024-05-10T14:30:00",
            "observacao": "retorno"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(created["medico"], doctor_id);
    assert_eq!(created["data"], "2024-05-10T14:30:00");

    let uri = format!("/api/consultas/{id}");
    let req = test::TestRequest::get().uri(&uri).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let update = json!({
        "medico": doctor_id,
        "paciente": "Carla Lima",
        "data": "2024-05-11T09:00:00"
    });
    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["paciente"], "Carla Lima");
    assert_eq!(fetched["data"], "2024-05-11T09:00:00");
    assert_eq!(fetched["observacao"], Value::Null);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let expected = format!("Consulta não encontrada! Id: {id}, Tipo: Consulta");

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], expected);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], expected);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], expected);
}

#[actix_web::test]
async fn appointment_page_sorted_by_patient() {
    let test_db = common::TestDb::new("appointment_page_sorted_by_patient.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/medicos")
        .set_json(json!({ "nome": "Ana", "crm": "CRM-SP 1" }))
        .to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;
    let doctor_id = doctor["id"].as_i64().expect("generated id");

    for paciente in ["Carla", "Alice", "Bruno"] {
        let req = test::TestRequest::post()
            .uri("/api/consultas")
            .set_json(json!({
                "medico": doctor_id,
                "paciente": paciente,
                "data": "2024-05-10T14:30:00"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/consultas/page?limit=2")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["sort"]["property"], "paciente");
    assert_eq!(page["content"][0]["paciente"], "Alice");
    assert_eq!(page["content"][1]["paciente"], "Bruno");

    let req = test::TestRequest::get()
        .uri("/api/consultas/page?direction=desc")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["content"][0]["paciente"], "Carla");
    assert_eq!(page["sort"]["direction"], "DESC");
}

#[actix_web::test]
async fn non_numeric_id_is_json_bad_request() {
    let test_db = common::TestDb::new("non_numeric_id_is_json_bad_request.db");
    let app = init_app!(test_db);

    for uri in ["/api/medicos/abc", "/api/procedimentos/1x", "/api/consultas/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
    }

    let req = test::TestRequest::delete()
        .uri("/api/medicos/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn doctor_nested_collections() {
    let test_db = common::TestDb::new("doctor_nested_collections.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/medicos")
        .set_json(json!({ "nome": "Ana", "crm": "CRM-SP 1" }))
        .to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;
    let id = doctor["id"].as_i64().expect("generated id");
    assert_eq!(doctor["especialidades"], json!([]));

    let req = test::TestRequest::post()
        .uri("/api/procedimentos")
        .set_json(json!({ "nome": "Cardiologia", "preco": 300.0, "medico": id }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/consultas")
        .set_json(json!({ "medico": id, "paciente": "Carla", "data": "2024-05-10T14:30:00" }))
        .to_request();
    let appointment: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(appointment["paciente"], "Carla");

    let req = test::TestRequest::get()
        .uri(&format!("/api/medicos/{id}/especialidades"))
        .to_request();
    let specialties: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(specialties[0]["nome"], "Cardiologia");

    let req = test::TestRequest::get()
        .uri(&format!("/api/medicos/{id}/consultas"))
        .to_request();
    let appointments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(appointments[0]["paciente"], "Carla");

    let req = test::TestRequest::get()
        .uri(&format!("/api/medicos/{id}"))
        .to_request();
    let doctor: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(doctor["especialidades"].as_array().map(Vec::len), Some(1));
    assert_eq!(doctor["consultas"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/api/medicos/999/consultas")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Consulta não encontrada! Id: 999, Tipo: Consulta");

    let req = test::TestRequest::get()
        .uri("/api/medicos/999/especialidades")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Especialidade não encontrada! Id: 999, Tipo: Procedimento"
    );
}

#[actix_web::test]
async fn invalid_payloads_are_bad_requests() {
    let test_db = common::TestDb::new("invalid_payloads_are_bad_requests.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/procedimentos")
        .set_json(json!({ "nome": "Consulta" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");

    let req = test::TestRequest::post()
        .uri("/api/procedimentos")
        .set_json(json!({ "nome": "", "preco": 10.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/consultas")
        .set_json(json!({ "medico": 42, "paciente": "Carla", "data": "2024-05-10T14:30:00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_reports_ok() {
    let test_db = common::TestDb::new("health_reports_ok.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}
