mod helpers;

use helpers::*;
use staffdesk::services::{
    AvailabilityService, CompanyClient, CompanyConfig, RulesClient, RulesConfig,
};

/// Config pointing at a port nothing listens on, with short timeouts so the
/// tests stay fast.
fn unreachable_rules_config() -> RulesConfig {
    RulesConfig {
        enabled: true,
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: 0.3,
        read_timeout: 0.3,
        audit_enabled: false,
        audit_service: "employee-service".to_string(),
    }
}

#[tokio::test]
async fn disabled_client_returns_open_verdict_without_network() {
    let client = RulesClient::new(RulesConfig::default());
    assert!(!client.enabled());

    let verdict = client
        .availability_check(&[slot(1, t(9, 0), t(12, 0))], None)
        .await;

    assert!(verdict.ok);
    assert!(verdict.overlaps.is_empty());
    assert!(verdict.out_of_bounds.is_empty());
}

#[tokio::test]
async fn unreachable_remote_fails_open() {
    let client = RulesClient::new(unreachable_rules_config());
    assert!(client.enabled());

    let verdict = client
        .availability_check(&[slot(1, t(9, 0), t(12, 0))], None)
        .await;

    assert!(verdict.ok, "transport failure must resolve to the open verdict");
    assert!(verdict.overlaps.is_empty());
    assert!(verdict.out_of_bounds.is_empty());
}

#[tokio::test]
async fn valid_batch_is_persisted_despite_unreachable_remote() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Remote").await;

    let service = AvailabilityService::new(
        db.clone(),
        db.clone(),
        CompanyClient::new(CompanyConfig::default()),
        RulesClient::new(unreachable_rules_config()),
    );

    let created = service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await
        .expect("a degraded advisory check must not block the write");
    assert_eq!(created.len(), 1);

    let stored = service.list_slots(&employee.id).await.unwrap();
    assert_eq!(stored, created);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn local_conflicts_still_fail_when_remote_is_unreachable() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let employee = create_test_employee(&db, "Remote").await;

    let service = AvailabilityService::new(
        db.clone(),
        db.clone(),
        CompanyClient::new(CompanyConfig::default()),
        RulesClient::new(unreachable_rules_config()),
    );

    service
        .add_slots(&employee.id, vec![slot(1, t(9, 0), t(12, 0))])
        .await
        .unwrap();

    // Fail-open applies to the advisory check only, never to our own
    // validation.
    let result = service
        .add_slots(&employee.id, vec![slot(1, t(10, 0), t(11, 0))])
        .await;
    assert!(result.is_err());

    teardown_test_db(test_db).await;
}
