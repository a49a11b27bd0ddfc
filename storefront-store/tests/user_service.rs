use std::sync::Arc;
use storefront_core::{CoreError, UserService};
use storefront_store::InMemoryUserStore;

#[tokio::test]
async fn test_create_then_lookup() {
    let service = UserService::new(InMemoryUserStore::new());

    let id = service.create_user("Alice", "alice@example.com").await.unwrap();
    let user = service.get_user(&id.to_string()).await.unwrap().expect("user should exist");

    assert_eq!(user.id, id);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
}

#[tokio::test]
async fn test_lookup_miss_is_not_an_error() {
    let service = UserService::new(InMemoryUserStore::new());

    assert!(service.get_user("00000000-0000-0000-0000-000000000000").await.unwrap().is_none());
    assert!(service.get_user("unknown").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_input_leaves_store_untouched() {
    let service = UserService::new(InMemoryUserStore::new());

    let err = service.create_user("Bob", "bob.example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid email");

    let err = service.create_user("", "bob@example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "name and email required");

    let err = service.get_user("").await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));

    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_concurrent_creation() {
    let service = Arc::new(UserService::new(InMemoryUserStore::new()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service.create_user(&format!("user-{}", i), &format!("user{}@example.com", i)).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.store().len().await, 16);
}
