//! Bank service insertion utilities.

use bson::Bson;
use docstore::{Collection, DocumentStore};
use entity::bank_service::Model as BankServiceModel;

use crate::{
    constant::TEST_BANK_COLLECTION,
    error::TestError,
    fixtures::bank::{
        factory::{mock_bank, mock_bank_name},
        BankFixtures,
    },
};

impl<'a> BankFixtures<'a> {
    /// Insert a mock bank service into the store.
    ///
    /// # Arguments
    /// - `name` - Business key of the bank service
    ///
    /// # Returns
    /// - `Ok(BankServiceModel)` - The inserted record including its store-assigned id
    /// - `Err(TestError)` - Encoding or insertion failed
    pub async fn insert_mock_bank(&self, name: &str) -> Result<BankServiceModel, TestError> {
        let mut bank = mock_bank(name);

        let collection = self.context.store.collection(TEST_BANK_COLLECTION);
        let id = collection.insert_one(bson::to_document(&bank)?).await?;
        bank.id = match id {
            Bson::ObjectId(id) => Some(id),
            _ => None,
        };

        Ok(bank)
    }

    /// Insert `count` mock bank services named `Bank 00`, `Bank 01`, ...
    ///
    /// # Returns
    /// - `Ok(Vec<BankServiceModel>)` - Inserted records in insertion order
    /// - `Err(TestError)` - Encoding or insertion failed
    pub async fn insert_mock_banks(&self, count: usize) -> Result<Vec<BankServiceModel>, TestError> {
        let mut banks = Vec::with_capacity(count);
        for index in 0..count {
            banks.push(self.insert_mock_bank(&mock_bank_name(index)).await?);
        }

        Ok(banks)
    }

    /// Look up a stored bank service by name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<BankServiceModel>, TestError> {
        Ok(self.all()?.into_iter().find(|bank| bank.name == name))
    }

    /// All stored bank services in natural order.
    ///
    /// Reads the store's contents directly, so it is neither counted nor affected by armed
    /// failures.
    pub fn all(&self) -> Result<Vec<BankServiceModel>, TestError> {
        self.context
            .store
            .documents(TEST_BANK_COLLECTION)?
            .into_iter()
            .map(|document| {
                bson::from_document::<BankServiceModel>(document).map_err(TestError::from)
            })
            .collect()
    }
}
