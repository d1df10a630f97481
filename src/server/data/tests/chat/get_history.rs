//! Tests for ChatRepository::get_history method.

use super::*;

/// Expect a stored message to show up in the history
#[tokio::test]
async fn includes_stored_message() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let user_id = test.new_user_id();

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let mut message =
        chat_factory::mock_chat_message(user_id, 0, chat_factory::mock_time_stamp(0));
    message.message = "hi".to_string();
    message.response = "hello".to_string();
    repo.store_message(&message).await.unwrap();

    let result = repo.get_history(&user_id.to_hex()).await;

    assert!(result.is_ok());
    assert!(result.unwrap().contains(&ChatResponse {
        message: "hi".to_string(),
        response: "hello".to_string(),
    }));

    Ok(())
}

/// Expect the whole history in natural order when within the retention limit
#[tokio::test]
async fn returns_history_within_limit() -> Result<(), TestError> {
    let user_id = ObjectId::new();
    let test = TestBuilder::new().with_mock_history(user_id, 6).build().await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let history = repo.get_history(&user_id.to_hex()).await.unwrap();

    assert_eq!(history, responses(0..6));
    assert_eq!(test.calls(Operation::DeleteOne)?, 0);

    Ok(())
}

/// Expect the oldest messages past the retention limit to be evicted first
#[tokio::test]
async fn evicts_before_reading() -> Result<(), TestError> {
    let user_id = ObjectId::new();
    let test = TestBuilder::new().with_mock_history(user_id, 13).build().await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let history = repo.get_history(&user_id.to_hex()).await.unwrap();

    assert_eq!(history, responses(3..13));
    assert_eq!(
        test.chat().messages_for(user_id)?.len(),
        TEST_RETENTION_LIMIT as usize
    );

    Ok(())
}

/// Expect the configured retention limit to be used by the sweep
#[tokio::test]
async fn uses_configured_retention_limit() -> Result<(), TestError> {
    let user_id = ObjectId::new();
    let test = TestBuilder::new().with_mock_history(user_id, 5).build().await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, 2);
    let history = repo.get_history(&user_id.to_hex()).await.unwrap();

    assert_eq!(history, responses(3..5));

    Ok(())
}

/// Expect a failed eviction to be ignored and the history still returned
#[tokio::test]
async fn ignores_eviction_failure() -> Result<(), TestError> {
    let user_id = ObjectId::new();
    let test = TestBuilder::new()
        .with_mock_history(user_id, 12)
        .with_failure(Operation::DeleteOne)
        .build()
        .await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let result = repo.get_history(&user_id.to_hex()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), responses(0..12));

    Ok(())
}

/// Expect an empty history for a user without messages
#[tokio::test]
async fn returns_empty_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_history(ObjectId::new(), 3)
        .build()
        .await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let history = repo.get_history(&ObjectId::new().to_hex()).await.unwrap();

    assert!(history.is_empty());

    Ok(())
}

/// Expect InvalidId for a malformed user id
#[tokio::test]
async fn fails_for_malformed_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let result = repo.get_history("").await;

    assert!(matches!(result, Err(RepositoryError::InvalidId(_))));
    assert_eq!(test.calls(Operation::Find)?, 0);

    Ok(())
}

/// Expect errors reading the history to propagate
#[tokio::test]
async fn fails_when_find_fails() -> Result<(), TestError> {
    let user_id = ObjectId::new();
    let test = TestBuilder::new()
        .with_mock_history(user_id, 3)
        .with_failure(Operation::Find)
        .build()
        .await?;

    let repo = ChatRepository::new(&test.store, TEST_CHAT_COLLECTION, TEST_RETENTION_LIMIT);
    let result = repo.get_history(&user_id.to_hex()).await;

    assert!(matches!(result, Err(RepositoryError::StoreError(_))));

    Ok(())
}
