use std::sync::Arc;
use zonecast_application::services::DelegationService;
use zonecast_application::use_cases::{
    CreateDelegateUseCase, DeleteDelegateUseCase, GetDelegatesUseCase, UpdateDelegateUseCase,
};
use zonecast_domain::DomainError;

mod helpers;
use helpers::MockDelegateRepository;

#[tokio::test]
async fn test_create_delegate() {
    let repo = Arc::new(MockDelegateRepository::new());
    let use_case = CreateDelegateUseCase::new(repo.clone());

    let delegate = use_case
        .execute("example.com.".to_string(), " https://ns.other.net ".to_string())
        .await
        .unwrap();

    assert_eq!(delegate.domain.as_ref(), "example.com");
    assert_eq!(delegate.base_url.as_ref(), "https://ns.other.net");
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_create_delegate_rejects_duplicates_and_bad_urls() {
    let repo = Arc::new(MockDelegateRepository::new());
    let use_case = CreateDelegateUseCase::new(repo.clone());
    use_case
        .execute("example.com".to_string(), "http://ns.other.net".to_string())
        .await
        .unwrap();

    let dup = use_case
        .execute("example.com".to_string(), "http://elsewhere.net".to_string())
        .await;
    assert!(matches!(dup, Err(DomainError::DelegateAlreadyExists(_))));

    let bad_url = use_case
        .execute("example.org".to_string(), "ftp://ns.other.net".to_string())
        .await;
    assert!(matches!(bad_url, Err(DomainError::InvalidDelegate(_))));

    let bad_domain = use_case
        .execute("".to_string(), "http://ns.other.net".to_string())
        .await;
    assert!(matches!(bad_domain, Err(DomainError::InvalidDelegate(_))));

    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_update_delegate() {
    let repo = Arc::new(MockDelegateRepository::new());
    let create = CreateDelegateUseCase::new(repo.clone());
    let first = create
        .execute("example.com".to_string(), "http://a.net".to_string())
        .await
        .unwrap();
    create
        .execute("example.org".to_string(), "http://b.net".to_string())
        .await
        .unwrap();

    let update = UpdateDelegateUseCase::new(repo.clone());

    let moved = update
        .execute(first.id, None, Some("https://c.net/".to_string()))
        .await
        .unwrap();
    assert_eq!(moved.domain.as_ref(), "example.com");
    assert_eq!(moved.base_url.as_ref(), "https://c.net/");

    let clash = update
        .execute(first.id, Some("example.org".to_string()), None)
        .await;
    assert!(matches!(clash, Err(DomainError::DelegateAlreadyExists(_))));

    let same = update
        .execute(first.id, Some("example.com".to_string()), None)
        .await;
    assert!(same.is_ok());

    let missing = update.execute(404, None, None).await;
    assert!(matches!(missing, Err(DomainError::DelegateNotFound(404))));
}

#[tokio::test]
async fn test_get_and_delete_delegates() {
    let repo = Arc::new(MockDelegateRepository::new());
    let created = CreateDelegateUseCase::new(repo.clone())
        .execute("example.com".to_string(), "http://a.net".to_string())
        .await
        .unwrap();

    let get = GetDelegatesUseCase::new(repo.clone());
    assert_eq!(get.get_all().await.unwrap().len(), 1);
    assert!(get.get_by_id(created.id).await.unwrap().is_some());

    let delete = DeleteDelegateUseCase::new(repo.clone());
    delete.execute(created.id).await.unwrap();
    assert!(get.get_by_id(created.id).await.unwrap().is_none());

    let again = delete.execute(created.id).await;
    assert!(matches!(again, Err(DomainError::DelegateNotFound(_))));
}

#[tokio::test]
async fn test_delegation_lookup_is_one_level() {
    let repo = Arc::new(MockDelegateRepository::new());
    CreateDelegateUseCase::new(repo.clone())
        .execute("example.com".to_string(), "http://a.net".to_string())
        .await
        .unwrap();
    let service = DelegationService::new(repo);

    assert!(service.find_for("example.com.").await.unwrap().is_some());
    assert!(service.find_for("www.example.com").await.unwrap().is_some());
    assert!(service.find_for("a.www.example.com").await.unwrap().is_none());
    assert!(service.find_for("example.org").await.unwrap().is_none());
}
