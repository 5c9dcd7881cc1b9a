//! End-to-end CRUD flows through the public service API.

use super::helpers::{dto, service};
use monitor_inventory::monitor::{
    domain::MonitorId, services::MonitorServiceError, transport::MonitorDto,
};
use rust_decimal::Decimal;

#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_read_update_delete() {
    let svc = service();

    // Create {serial: "SN1", manufacturer: "Acme", price: 199.99,
    // quantity: 5, diagonal: 24.0} and expect an assigned id.
    let created = svc.create(dto("SN1")).await.expect("creation succeeds");
    let id = MonitorId::new(created.id.expect("created record carries an id"));
    assert_eq!(created.serial_number, "SN1");
    assert_eq!(created.price, Decimal::new(19999, 2));

    // A second create with the same serial is rejected.
    let duplicate = svc.create(dto("SN1")).await;
    assert!(matches!(
        duplicate,
        Err(MonitorServiceError::AlreadyExists(_))
    ));

    // Read back the first record.
    let found = svc.read_by_id(id).await.expect("lookup succeeds");
    assert_eq!(found, created);

    // Overwrite every field, keeping identity.
    let update_input = MonitorDto {
        id: None,
        serial_number: "SN2".to_owned(),
        manufacturer: "Acme".to_owned(),
        price: Decimal::new(17999, 2),
        quantity: 3,
        diagonal: Decimal::new(240, 1),
    };
    let updated = svc.update(id, update_input).await.expect("update succeeds");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.serial_number, "SN2");
    assert_eq!(updated.price, Decimal::new(17999, 2));

    // Delete, then the id no longer resolves.
    svc.delete(id).await.expect("deletion succeeds");
    let gone = svc.read_by_id(id).await;
    assert!(matches!(gone, Err(MonitorServiceError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn find_all_reflects_creates_and_deletes() {
    let svc = service();

    assert!(svc
        .find_all()
        .await
        .expect("listing succeeds")
        .is_empty());

    let first = svc.create(dto("SN1")).await.expect("creation succeeds");
    svc.create(dto("SN2")).await.expect("creation succeeds");
    svc.create(dto("SN3")).await.expect("creation succeeds");

    let first_id = MonitorId::new(first.id.expect("created record carries an id"));
    svc.delete(first_id).await.expect("deletion succeeds");

    let all = svc.find_all().await.expect("listing succeeds");
    assert_eq!(all.len(), 2);

    let serials: Vec<&str> = all.iter().map(|m| m.serial_number.as_str()).collect();
    assert!(serials.contains(&"SN2"));
    assert!(serials.contains(&"SN3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn freed_serial_is_reusable_after_delete() {
    let svc = service();

    let first = svc.create(dto("SN1")).await.expect("creation succeeds");
    let first_id = MonitorId::new(first.id.expect("created record carries an id"));
    svc.delete(first_id).await.expect("deletion succeeds");

    let recreated = svc.create(dto("SN1")).await.expect("recreation succeeds");

    // Same serial, fresh identity.
    assert_ne!(recreated.id, first.id);
}
