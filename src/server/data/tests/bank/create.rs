//! Tests for BankRepository::create method.

use super::*;

/// Expect the inserted record to be returned with a store-assigned id
#[tokio::test]
async fn creates_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.create(bank_factory::mock_bank("Acme Savings")).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.name, "Acme Savings");
    assert_eq!(test.bank().find_by_name("Acme Savings")?, Some(created));

    Ok(())
}

/// Expect AlreadyExists and no insert when the name is taken
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_bank("Acme Savings").build().await?;
    let inserts_before = test.calls(Operation::InsertOne)?;

    let mut duplicate = bank_factory::mock_bank("Acme Savings");
    duplicate.details = "Another bank with the same name".to_string();
    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.create(duplicate).await;

    assert!(matches!(result, Err(RepositoryError::AlreadyExists(ref name)) if name == "Acme Savings"));
    assert_eq!(test.calls(Operation::InsertOne)?, inserts_before);
    assert_eq!(test.bank().all()?.len(), 1);

    Ok(())
}

/// Expect a caller-supplied id to be replaced by one assigned by the store
#[tokio::test]
async fn ignores_supplied_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let supplied_id = ObjectId::new();

    let mut bank = bank_factory::mock_bank("Acme Savings");
    bank.id = Some(supplied_id);
    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let created = repo.create(bank).await.unwrap();

    assert!(created.id.is_some());
    assert_ne!(created.id, Some(supplied_id));

    Ok(())
}

/// Expect names differing only by case to be treated as distinct
#[tokio::test]
async fn name_check_is_exact() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_bank("Acme Savings").build().await?;

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.create(bank_factory::mock_bank("acme savings")).await;

    assert!(result.is_ok());
    assert_eq!(test.bank().all()?.len(), 2);

    Ok(())
}

/// Expect store errors during the insert to propagate
#[tokio::test]
async fn fails_when_store_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failure(Operation::InsertOne)
        .build()
        .await?;

    let repo = BankRepository::new(&test.store, TEST_BANK_COLLECTION);
    let result = repo.create(bank_factory::mock_bank("Acme Savings")).await;

    assert!(matches!(result, Err(RepositoryError::StoreError(_))));
    assert!(test.bank().all()?.is_empty());

    Ok(())
}
