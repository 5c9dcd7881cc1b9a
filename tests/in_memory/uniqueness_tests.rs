//! Serial-number uniqueness behaviour through the public service API.

use super::helpers::{dto, service};
use monitor_inventory::monitor::{domain::MonitorId, services::MonitorServiceError};

#[tokio::test(flavor = "multi_thread")]
async fn create_with_taken_serial_reports_already_exists() {
    let svc = service();
    svc.create(dto("SN1")).await.expect("creation succeeds");

    let result = svc.create(dto("SN1")).await;

    assert!(matches!(
        result,
        Err(MonitorServiceError::AlreadyExists(serial)) if serial.as_str() == "SN1"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_moving_to_taken_serial_reports_already_exists() {
    let svc = service();
    svc.create(dto("SN1")).await.expect("creation succeeds");
    let second = svc.create(dto("SN2")).await.expect("creation succeeds");
    let second_id = MonitorId::new(second.id.expect("created record carries an id"));

    let result = svc.update(second_id, dto("SN1")).await;

    assert!(matches!(
        result,
        Err(MonitorServiceError::AlreadyExists(serial)) if serial.as_str() == "SN1"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn swapping_serials_requires_an_intermediate_value() {
    let svc = service();
    let first = svc.create(dto("SN1")).await.expect("creation succeeds");
    let first_id = MonitorId::new(first.id.expect("created record carries an id"));

    // Moving a record onto its own serial is not a collision.
    let unchanged = svc
        .update(first_id, dto("SN1"))
        .await
        .expect("self-update succeeds");
    assert_eq!(unchanged.serial_number, "SN1");

    // Moving it to a free serial releases the old one.
    svc.update(first_id, dto("SN9"))
        .await
        .expect("update to free serial succeeds");
    svc.create(dto("SN1"))
        .await
        .expect("released serial is available again");
}
