mod helpers;

use helpers::*;
use staffdesk::api::middleware::ApiError;
use staffdesk::models::UpdateEmployeeRequest;
use staffdesk::services::employee_service;

#[tokio::test]
async fn employee_crud_round_trip() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let created = employee_service::create_employee(db.as_ref(), employee_request("Ada", "Craft"))
        .await
        .expect("create should succeed");
    assert!(!created.id.is_empty());
    assert!(created.active);

    let fetched = employee_service::get_employee(db.as_ref(), &created.id)
        .await
        .unwrap();
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.birth_date, created.birth_date);

    let listed = employee_service::list_employees(db.as_ref(), 0, 100)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let result =
        employee_service::create_employee(db.as_ref(), employee_request("", "Craft")).await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let created = create_test_employee(&db, "Jane").await;

    let updated = employee_service::update_employee(
        db.as_ref(),
        &created.id,
        UpdateEmployeeRequest {
            idp_id: Some("idp|jane".to_string()),
            first_name: "Janet".to_string(),
            last_name: "Doe".to_string(),
            gender: false,
            birth_date: chrono::NaiveDate::from_ymd_opt(1992, 2, 2).unwrap(),
            id_picture: None,
            active: true,
            company_id: Some(1),
            location_id: Some(12),
        },
    )
    .await
    .expect("update should succeed");

    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.idp_id.as_deref(), Some("idp|jane"));
    assert_eq!(updated.company_id, Some(1));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn updating_unknown_employee_is_not_found() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let result = employee_service::update_employee(
        db.as_ref(),
        "missing",
        UpdateEmployeeRequest {
            idp_id: None,
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
            gender: true,
            birth_date: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            id_picture: None,
            active: true,
            company_id: None,
            location_id: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn soft_delete_hides_employee_from_listing_but_keeps_the_row() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let created = create_test_employee(&db, "Gone").await;

    employee_service::delete_employee(db.as_ref(), &created.id)
        .await
        .expect("delete should succeed");

    let listed = employee_service::list_employees(db.as_ref(), 0, 100)
        .await
        .unwrap();
    assert!(listed.is_empty());

    // Row is retained, only deactivated
    let fetched = employee_service::get_employee(db.as_ref(), &created.id)
        .await
        .unwrap();
    assert!(!fetched.active);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn pagination_skips_and_limits() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    for name in ["One", "Two", "Three"] {
        create_test_employee(&db, name).await;
    }

    let page = employee_service::list_employees(db.as_ref(), 1, 1)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);

    let rest = employee_service::list_employees(db.as_ref(), 2, 100)
        .await
        .unwrap();
    assert_eq!(rest.len(), 1);

    teardown_test_db(test_db).await;
}
