//! Tests for BankRepository::get_by_id method.

use super::*;

/// Expect the stored record when the id exists
#[tokio::test]
async fn returns_existing_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_banks(3).build().await?;
    let banks = test.bank().all()?;
    let expected = &banks[1];

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo
        .get_by_id(&expected.id.unwrap().to_hex())
        .await;

    assert!(result.is_ok());
    assert_eq!(&result.unwrap(), expected);

    Ok(())
}

/// Expect NotFound for a well-formed id with no record
#[tokio::test]
async fn fails_for_nonexistent_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_banks(1).build().await?;

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.get_by_id(&ObjectId::new().to_hex()).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));

    Ok(())
}

/// Expect InvalidId without querying the store for a malformed id
#[tokio::test]
async fn fails_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_banks(1).build().await?;

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.get_by_id("not-an-object-id").await;

    assert!(matches!(result, Err(RepositoryError::InvalidId(ref id)) if id == "not-an-object-id"));
    assert_eq!(test.calls(Operation::FindOne)?, 0);

    Ok(())
}

/// Expect store errors to propagate
#[tokio::test]
async fn fails_when_store_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_banks(1)
        .with_failure(Operation::FindOne)
        .build()
        .await?;
    let bank = test.bank().all()?.remove(0);

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.get_by_id(&bank.id.unwrap().to_hex()).await;

    assert!(matches!(result, Err(RepositoryError::StoreError(_))));

    Ok(())
}
