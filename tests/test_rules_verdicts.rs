mod helpers;

use helpers::*;
use staffdesk::api::middleware::ApiError;
use staffdesk::database::Database;
use staffdesk::services::{
    AvailabilityService, CompanyClient, CompanyConfig, RulesClient, RulesConfig,
};
use std::sync::Arc;

fn rules_config(base_url: String) -> RulesConfig {
    RulesConfig {
        enabled: true,
        base_url,
        connect_timeout: 1.0,
        read_timeout: 1.0,
        ..RulesConfig::default()
    }
}

fn service_against(db: &Arc<Database>, base_url: String) -> AvailabilityService {
    AvailabilityService::new(
        db.clone(),
        db.clone(),
        CompanyClient::new(CompanyConfig::default()),
        RulesClient::new(rules_config(base_url)),
    )
}

#[tokio::test]
async fn error_status_fails_open_and_persists() {
    let base_url = spawn_http_stub(500, "internal error").await;
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Verdict").await;
    let service = service_against(&db, base_url);

    let created = service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await
        .expect("a 5xx from the helper must not block the write");
    assert_eq!(created.len(), 1);

    let stored = service.list_slots(&employee.id).await.unwrap();
    assert_eq!(stored, created);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn malformed_body_fails_open_and_persists() {
    let base_url = spawn_http_stub(200, "this is not json").await;
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Verdict").await;
    let service = service_against(&db, base_url);

    let created = service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await
        .expect("an undecodable verdict must not block the write");
    assert_eq!(created.len(), 1);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn failing_verdict_rejects_with_counts() {
    let base_url = spawn_http_stub(
        200,
        r#"{"ok":false,"overlaps":[{"day":1},{"day":2}],"outOfBounds":[]}"#,
    )
    .await;
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Verdict").await;
    let service = service_against(&db, base_url);

    let result = service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await;

    match result {
        Err(ApiError::BadRequest(detail)) => {
            assert!(
                detail.contains("availability validation failed"),
                "got: {detail}"
            );
            assert!(detail.contains("overlaps=2"), "got: {detail}");
            assert!(detail.contains("outOfBounds=0"), "got: {detail}");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }

    // A rejecting verdict must keep the batch out of the store.
    assert!(service.list_slots(&employee.id).await.unwrap().is_empty());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn passing_verdict_is_accepted() {
    let base_url = spawn_http_stub(200, r#"{"ok":true,"overlaps":[],"outOfBounds":[]}"#).await;
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Verdict").await;
    let service = service_against(&db, base_url);

    let created = service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await
        .expect("a clean verdict must let the write through");
    assert_eq!(created.len(), 1);

    teardown_test_db(test_db).await;
}
