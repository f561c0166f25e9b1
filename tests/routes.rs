use std::time::Duration;

use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use serde_json::{Value, json};

use counsel_desk::domain::case::Case;
use counsel_desk::domain::client::Client;
use counsel_desk::domain::types::{CaseId, CaseStatus};
use counsel_desk::models::config::ServerConfig;
use counsel_desk::repository::errors::RepositoryError;
use counsel_desk::repository::{FixtureRepository, FixtureTable, seed};
use counsel_desk::routes::{
    alert_level_to_str, configure_api, configure_attachments, configure_lists,
};

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        secret: "s".repeat(64),
        latency_ms: 0,
        request_timeout_ms: 1_000,
    }
}

macro_rules! init_app {
    ($repo:expr) => {{
        let message_store = CookieMessageStore::builder(Key::generate()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        test::init_service(
            App::new()
                .wrap(message_framework)
                .service(
                    web::scope("/api")
                        .configure(configure_api::<Case>)
                        .configure(configure_api::<Client>)
                        .configure(configure_attachments),
                )
                .configure(configure_lists::<Case>)
                .configure(configure_lists::<Client>)
                .app_data($repo.clone())
                .app_data(web::Data::new(server_config())),
        )
        .await
    }};
}

fn seeded() -> web::Data<FixtureRepository> {
    web::Data::new(FixtureRepository::seeded(Duration::ZERO))
}

fn location(resp: &actix_web::dev::ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[actix_web::test]
async fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn list_page_hydrates_from_query() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/cases?status=pending&query=smith")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["kind"], "case");
    assert_eq!(body["filter"]["status"], "pending");
    assert_eq!(body["filter"]["query"], "smith");
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["rows"][0]["id"], "case-1");
}

#[actix_web::test]
async fn search_redirect_preserves_other_params() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/cases/search?status=pending&page=2")
        .set_form([("query", "  Smith ")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cases?status=pending&page=2&query=Smith");
}

#[actix_web::test]
async fn overlong_search_is_rejected() {
    let repo = seeded();
    let app = init_app!(repo);

    let query = "x".repeat(201);
    let req = test::TestRequest::post()
        .uri("/cases/search?status=pending")
        .set_form([("query", query.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(location(&resp), "/cases?status=pending");
}

#[actix_web::test]
async fn client_all_status_is_written_explicitly() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/clients/status?query=smith")
        .set_form([("status", "all")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(location(&resp), "/clients?query=smith&status=all");
}

#[actix_web::test]
async fn unknown_status_keeps_url() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/cases/status?query=smith")
        .set_form([("status", "closed")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cases?query=smith");
}

#[actix_web::test]
async fn row_update_redirects_back_and_persists() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/cases/case-2/update?status=approved")
        .set_form([("field", "status"), ("value", "rejected")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/cases?status=approved");

    let stored = repo.cases().snapshot().unwrap();
    let case = stored.iter().find(|c| c.id.as_str() == "case-2").unwrap();
    assert_eq!(case.status.to_string(), "rejected");
}

#[actix_web::test]
async fn row_update_notification_reaches_the_next_page() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/cases/case-2/update?status=approved")
        .set_form([("field", "status"), ("value", "rejected")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    assert!(!cookies.is_empty());

    let mut next = test::TestRequest::get().uri(location(&resp));
    for cookie in cookies {
        next = next.cookie(cookie);
    }
    let body: Value = test::call_and_read_body_json(&app, next.to_request()).await;

    assert_eq!(
        body["alerts"],
        json!([{
            "level": "success",
            "message": "Status updated: Case case-2 has been rejected",
        }])
    );
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn rows_named_like_list_actions_can_be_updated() {
    let mut rows = seed::cases();
    let mut search = rows[0].clone();
    search.id = CaseId::new("search").unwrap();
    let mut status = rows[1].clone();
    status.id = CaseId::new("status").unwrap();
    status.status = CaseStatus::Pending;
    rows.push(search);
    rows.push(status);

    let repo = web::Data::new(FixtureRepository::new(
        FixtureTable::new(rows),
        FixtureTable::new(seed::clients()),
        FixtureTable::new(seed::chats()),
        FixtureTable::new(seed::consultations()),
    ));
    let app = init_app!(repo);

    for id in ["search", "status"] {
        let req = test::TestRequest::post()
            .uri(&format!("/cases/{id}/update"))
            .set_form([("field", "status"), ("value", "approved")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/cases");
    }

    let stored = repo.cases().snapshot().unwrap();
    for id in ["search", "status"] {
        let case = stored.iter().find(|c| c.id.as_str() == id).unwrap();
        assert_eq!(case.status, CaseStatus::Approved);
    }
}

#[actix_web::test]
async fn api_lists_filtered_entities() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients?status=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["items"][0]["id"], "client-1");
}

#[actix_web::test]
async fn api_rejects_unknown_status() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/v1/cases?status=closed")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn api_update_returns_entity() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients/client-2")
        .set_json(json!({"field": "favorite", "value": true}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], "client-2");
    assert_eq!(body["is_favorite"], true);
}

#[actix_web::test]
async fn api_update_of_unknown_id_is_not_found() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/cases/case-99")
        .set_json(json!({"field": "status", "value": "approved"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn api_update_during_outage_is_unavailable() {
    let repo = seeded();
    repo.cases()
        .fail_next_write(RepositoryError::Transient("offline".into()))
        .unwrap();
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/v1/cases/case-1")
        .set_json(json!({"field": "status", "value": "approved"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn api_lists_recordings() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/v1/recordings")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["items"][0]["id"], "rec_1");
    assert_eq!(body["items"][0]["duration"], "02:25");
}

#[actix_web::test]
async fn api_lists_files_of_one_case() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/v1/cases/case-2/files")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["file_name"], "settlement-draft.pdf");
    assert_eq!(body["items"][0]["storage_location"], "s3");
}

#[actix_web::test]
async fn api_deletes_recordings_and_files() {
    let repo = seeded();
    let app = init_app!(repo);

    let req = test::TestRequest::delete()
        .uri("/api/v1/recordings/rec_3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.recordings().snapshot().unwrap().len(), 4);

    let req = test::TestRequest::delete()
        .uri("/api/v1/recordings/rec_3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/v1/files/file_4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.case_files().snapshot().unwrap().len(), 3);
}
