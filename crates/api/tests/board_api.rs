//! Integration tests for notices, maintenance requests and board views.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, FakeGenerator};
use serde_json::json;

use condofacil_ai::Assistant;
use condofacil_core::board::MAX_TITLE_LENGTH;

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_notices_listed() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/notices").await).await;

    let notices = json["data"].as_array().unwrap();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0]["title"], "Manutenção Preventiva - Elevadores");
}

#[tokio::test]
async fn published_notice_goes_first() {
    let app = common::build_test_app();

    let response = post_json(
        app.clone(),
        "/api/v1/notices",
        json!({ "title": "Falta de água", "content": "Sem água amanhã.", "tone": "urgent" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["important"], true);
    assert_eq!(created["data"]["author"], "Síndico (via IA)");

    let json = body_json(get(app, "/api/v1/notices").await).await;
    let notices = json["data"].as_array().unwrap();
    assert_eq!(notices.len(), 3);
    assert_eq!(notices[0]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn publish_rejects_blank_title() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/notices",
        json!({ "title": " ", "content": "Texto", "tone": "formal" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn removed_notice_disappears() {
    let app = common::build_test_app();
    let listed = body_json(get(app.clone(), "/api/v1/notices").await).await;
    let id = listed["data"][0]["id"].as_str().unwrap().to_string();

    let response = delete(app.clone(), &format!("/api/v1/notices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app, &format!("/api/v1/notices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

#[tokio::test]
async fn opened_request_is_triaged_and_stored() {
    let generator = FakeGenerator::replying(r#"{"priority":"high","category":"Elétrica"}"#);
    let app = common::build_app_with(Assistant::with_generator(generator.clone()), None);

    let response = post_json(
        app.clone(),
        "/api/v1/maintenance",
        json!({ "title": "Curto no hall", "description": "Disjuntor desarma sozinho" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["data"]["priority"], "high");
    assert_eq!(created["data"]["category"], "Elétrica");
    assert_eq!(created["data"]["status"], "open");
    assert_eq!(created["data"]["location"], "Não informado");
    assert!(created["data"].get("triage_fallback").is_none());
    assert!(generator.prompts.lock().unwrap()[0].contains("Disjuntor desarma sozinho"));

    let json = body_json(get(app, "/api/v1/maintenance").await).await;
    assert_eq!(json["data"][0]["id"], created["data"]["id"]);
}

#[tokio::test]
async fn opened_request_without_credential_gets_default_triage() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app,
            "/api/v1/maintenance",
            json!({ "title": "Portão", "description": "Portão não fecha", "location": "Entrada" }),
        )
        .await,
    )
    .await;

    assert_eq!(created["data"]["priority"], "medium");
    assert_eq!(created["data"]["category"], "Geral");
    assert_eq!(created["data"]["location"], "Entrada");
    assert_eq!(created["data"]["triage_fallback"], "missing_credential");
}

#[tokio::test]
async fn open_request_validates_before_triage() {
    let generator = FakeGenerator::replying("unused");
    let app = common::build_app_with(Assistant::with_generator(generator.clone()), None);

    let response = post_json(
        app,
        "/api/v1/maintenance",
        json!({ "title": "", "description": "Algo quebrou" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn overlong_title_rejected_before_triage() {
    let generator = FakeGenerator::replying("unused");
    let app = common::build_app_with(Assistant::with_generator(generator.clone()), None);

    let response = post_json(
        app.clone(),
        "/api/v1/maintenance",
        json!({ "title": "t".repeat(MAX_TITLE_LENGTH + 1), "description": "Algo quebrou" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(generator.call_count(), 0);

    let json = body_json(get(app, "/api/v1/maintenance").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn status_change_applies_and_repeats_conflict() {
    let app = common::build_test_app();
    let listed = body_json(get(app.clone(), "/api/v1/maintenance").await).await;
    let id = listed["data"][0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/maintenance/{id}/status");

    let response = patch_json(app.clone(), &uri, json!({ "status": "in_progress" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "in_progress");

    let response = patch_json(app, &uri, json!({ "status": "in_progress" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn status_change_on_unknown_request_is_404() {
    let app = common::build_test_app();
    let response = patch_json(
        app,
        "/api/v1/maintenance/0190f5a8-0000-7000-8000-000000000000/status",
        json!({ "status": "completed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn amenities_listed() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/amenities").await).await;

    let amenities = json["data"].as_array().unwrap();
    assert_eq!(amenities.len(), 3);
    assert_eq!(amenities[0]["name"], "Salão de Festas");
}

#[tokio::test]
async fn dashboard_counts_follow_board() {
    let app = common::build_test_app();
    let before = body_json(get(app.clone(), "/api/v1/dashboard").await).await;
    assert_eq!(
        before["data"],
        json!({
            "notices": 2,
            "important_notices": 1,
            "open_requests": 1,
            "in_progress_requests": 0,
            "amenities": 3,
        })
    );

    post_json(
        app.clone(),
        "/api/v1/maintenance",
        json!({ "title": "Interfone", "description": "Interfone mudo" }),
    )
    .await;

    let after = body_json(get(app, "/api/v1/dashboard").await).await;
    assert_eq!(after["data"]["open_requests"], 2);
}
