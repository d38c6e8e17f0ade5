use std::sync::Arc;
use zonecast_application::ports::ZoneRepository;
use zonecast_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, UpdateRecordUseCase,
};
use zonecast_domain::DomainError;

mod helpers;
use helpers::{MockResourceRecordRepository, MockZoneRepository};

fn setup() -> (MockZoneRepository, MockResourceRecordRepository) {
    let zones = MockZoneRepository::new();
    let records = MockResourceRecordRepository::new(zones.clone());
    (zones, records)
}

#[tokio::test]
async fn test_create_record_qualifies_relative_name() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let use_case = CreateRecordUseCase::new(Arc::new(records.clone()), Arc::new(zones));

    let www = use_case
        .execute(zone.id, "www".to_string(), "a".to_string(), None, "1.2.3.4".to_string())
        .await
        .unwrap();
    let apex = use_case
        .execute(zone.id, "@".to_string(), "MX".to_string(), Some(600), "10 mail".to_string())
        .await
        .unwrap();
    let wildcard = use_case
        .execute(zone.id, "*".to_string(), "TXT".to_string(), None, "hi".to_string())
        .await
        .unwrap();

    assert_eq!(www.name.as_ref(), "www.example.com");
    assert_eq!(www.record_type.as_ref(), "A");
    assert_eq!(apex.name.as_ref(), "example.com");
    assert_eq!(apex.ttl, Some(600));
    assert_eq!(wildcard.name.as_ref(), "*.example.com");
    assert!(wildcard.is_wildcard());
    assert_eq!(records.count().await, 3);
}

#[tokio::test]
async fn test_create_record_advances_zone_serial() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let use_case = CreateRecordUseCase::new(Arc::new(records), Arc::new(zones.clone()));

    use_case
        .execute(zone.id, "www".to_string(), "A".to_string(), None, "1.2.3.4".to_string())
        .await
        .unwrap();

    let touched = zones.get_by_id(zone.id).await.unwrap().unwrap();
    assert!(touched.serial() > zone.serial());
}

#[tokio::test]
async fn test_create_record_rejects_name_outside_zone() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let use_case = CreateRecordUseCase::new(Arc::new(records.clone()), Arc::new(zones));

    let result = use_case
        .execute(zone.id, "www.other.net.".to_string(), "A".to_string(), None, "1.2.3.4".to_string())
        .await;

    assert!(matches!(result, Err(DomainError::InvalidRecord(_))));
    assert_eq!(records.count().await, 0);
}

#[tokio::test]
async fn test_create_record_rejects_synthesized_types() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let use_case = CreateRecordUseCase::new(Arc::new(records), Arc::new(zones));

    for record_type in ["SOA", "axfr", "ANY"] {
        let result = use_case
            .execute(zone.id, "@".to_string(), record_type.to_string(), None, "x".to_string())
            .await;
        assert!(
            matches!(result, Err(DomainError::InvalidRecord(_))),
            "{} should be rejected",
            record_type
        );
    }
}

#[tokio::test]
async fn test_create_record_rejects_empty_data_and_zero_ttl() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let use_case = CreateRecordUseCase::new(Arc::new(records), Arc::new(zones));

    let empty = use_case
        .execute(zone.id, "www".to_string(), "A".to_string(), None, "  ".to_string())
        .await;
    assert!(matches!(empty, Err(DomainError::InvalidRecord(_))));

    let zero = use_case
        .execute(zone.id, "www".to_string(), "A".to_string(), Some(0), "1.2.3.4".to_string())
        .await;
    assert!(matches!(zero, Err(DomainError::InvalidRecord(_))));
}

#[tokio::test]
async fn test_create_record_in_missing_zone() {
    let (zones, records) = setup();
    let use_case = CreateRecordUseCase::new(Arc::new(records), Arc::new(zones));

    let result = use_case
        .execute(9, "www".to_string(), "A".to_string(), None, "1.2.3.4".to_string())
        .await;

    assert!(matches!(result, Err(DomainError::ZoneNotFound(_))));
}

#[tokio::test]
async fn test_update_record_changes_only_given_fields() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let record = records.add(&zone, "www.example.com", "A", "1.2.3.4").await;
    let use_case = UpdateRecordUseCase::new(Arc::new(records), Arc::new(zones));

    let updated = use_case
        .execute(record.id, Some("web".to_string()), None, Some(120), None)
        .await
        .unwrap();

    assert_eq!(updated.name.as_ref(), "web.example.com");
    assert_eq!(updated.record_type.as_ref(), "A");
    assert_eq!(updated.ttl, Some(120));
    assert_eq!(updated.data.as_ref(), "1.2.3.4");
}

#[tokio::test]
async fn test_update_record_validation() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let record = records.add(&zone, "www.example.com", "A", "1.2.3.4").await;
    let use_case = UpdateRecordUseCase::new(Arc::new(records), Arc::new(zones));

    let outside = use_case
        .execute(record.id, Some("evil.org.".to_string()), None, None, None)
        .await;
    assert!(matches!(outside, Err(DomainError::InvalidRecord(_))));

    let soa = use_case
        .execute(record.id, None, Some("soa".to_string()), None, None)
        .await;
    assert!(matches!(soa, Err(DomainError::InvalidRecord(_))));

    let missing = use_case.execute(999, None, None, None, None).await;
    assert!(matches!(missing, Err(DomainError::RecordNotFound(999))));
}

#[tokio::test]
async fn test_delete_record() {
    let (zones, records) = setup();
    let zone = zones.add("example.com").await;
    let record = records.add(&zone, "www.example.com", "A", "1.2.3.4").await;
    let use_case = DeleteRecordUseCase::new(Arc::new(records.clone()));

    use_case.execute(record.id).await.unwrap();
    assert_eq!(records.count().await, 0);

    let again = use_case.execute(record.id).await;
    assert!(matches!(again, Err(DomainError::RecordNotFound(_))));
}

#[tokio::test]
async fn test_get_records_by_zone() {
    let (zones, records) = setup();
    let first = zones.add("example.com").await;
    let second = zones.add("example.org").await;
    records.add(&first, "www.example.com", "A", "1.2.3.4").await;
    records.add(&first, "mail.example.com", "A", "1.2.3.5").await;
    records.add(&second, "www.example.org", "A", "5.6.7.8").await;
    let use_case = GetRecordsUseCase::new(Arc::new(records), Arc::new(zones));

    assert_eq!(use_case.get_by_zone(first.id).await.unwrap().len(), 2);
    assert_eq!(use_case.get_by_zone(second.id).await.unwrap().len(), 1);

    let missing = use_case.get_by_zone(77).await;
    assert!(matches!(missing, Err(DomainError::ZoneNotFound(_))));
}
