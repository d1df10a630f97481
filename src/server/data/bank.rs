use bson::{doc, Document};
use docstore::{Collection, DocumentStore, FindOptions};
use entity::bank_service::BankUpdate;

use crate::server::{
    data::parse_object_id, error::repository::RepositoryError, model::db::BankServiceModel,
};

pub struct BankRepository<'a, S: DocumentStore> {
    store: &'a S,
    collection: String,
}

impl<'a, S: DocumentStore> BankRepository<'a, S> {
    /// Creates a new instance of [`BankRepository`]
    ///
    /// # Arguments
    /// - `store` - Document store holding the collection
    /// - `collection` - Name of the bank service collection
    pub fn new(store: &'a S, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }

    fn collection(&self) -> S::Collection {
        self.store.collection(&self.collection)
    }

    /// Get a bank service by its hex-encoded identifier
    ///
    /// # Returns
    /// - `Ok(BankServiceModel)` - The stored record
    /// - `Err(RepositoryError::InvalidId)` - `id` is not a valid object id
    /// - `Err(RepositoryError::NotFound)` - No record has this id
    pub async fn get_by_id(&self, id: &str) -> Result<BankServiceModel, RepositoryError> {
        let bank_id = parse_object_id(id)?;

        self.find_one(doc! { "_id": bank_id }).await
    }

    /// Overwrite the provided fields of a bank service
    ///
    /// The record is read back after the update; the two steps are not atomic, so a concurrent
    /// writer may be observed in the returned value.
    ///
    /// # Returns
    /// - `Ok(BankServiceModel)` - The record as stored after the update
    /// - `Err(RepositoryError::InvalidId)` - `id` is not a valid object id
    /// - `Err(RepositoryError::NotFound)` - No record has this id
    /// - `Err(RepositoryError::NoChange)` - Every provided field already held the given value
    pub async fn update(
        &self,
        id: &str,
        update: &BankUpdate,
    ) -> Result<BankServiceModel, RepositoryError> {
        let bank_id = parse_object_id(id)?;
        let filter = doc! { "_id": bank_id };
        let collection = self.collection();

        // MongoDB rejects an empty `$set`, an update without fields can only be a no-op
        if update.is_empty() {
            return match collection.find_one(filter).await? {
                Some(_) => Err(RepositoryError::NoChange),
                None => Err(RepositoryError::NotFound),
            };
        }

        let outcome = collection
            .update_one(filter.clone(), update.to_set_document()?)
            .await?;
        if outcome.matched == 0 {
            return Err(RepositoryError::NotFound);
        }
        if outcome.modified == 0 {
            return Err(RepositoryError::NoChange);
        }

        self.find_one(filter).await
    }

    /// Deletes a bank service
    ///
    /// Returns OK regardless of the record existing, the returned count (0 or 1) tells whether
    /// anything was removed.
    pub async fn delete(&self, id: &str) -> Result<u64, RepositoryError> {
        let bank_id = parse_object_id(id)?;

        Ok(self.collection().delete_one(doc! { "_id": bank_id }).await?)
    }

    /// Creates a new bank service
    ///
    /// Name uniqueness is checked with a lookup before inserting. The collection has no unique
    /// index, so two concurrent creates with the same name can both pass the check.
    ///
    /// Any identifier on `bank` is ignored, the store assigns a new one.
    ///
    /// # Returns
    /// - `Ok(BankServiceModel)` - The inserted record including its identifier
    /// - `Err(RepositoryError::AlreadyExists)` - A record with the same name exists
    pub async fn create(
        &self,
        mut bank: BankServiceModel,
    ) -> Result<BankServiceModel, RepositoryError> {
        let collection = self.collection();

        if collection
            .find_one(doc! { "name": bank.name.as_str() })
            .await?
            .is_some()
        {
            return Err(RepositoryError::AlreadyExists(bank.name));
        }

        bank.id = None;
        let bank_id = collection.insert_one(bson::to_document(&bank)?).await?;

        self.find_one(doc! { "_id": bank_id }).await
    }

    /// Get a bank service by exact name
    ///
    /// # Returns
    /// - `Ok(BankServiceModel)` - The record named `term`
    /// - `Err(RepositoryError::NotFound)` - No record has this name
    pub async fn search_by_name(&self, term: &str) -> Result<BankServiceModel, RepositoryError> {
        self.find_one(doc! { "name": term }).await
    }

    /// Get one page of bank services in the store's natural order
    ///
    /// # Arguments
    /// - `page` - 1-indexed page number
    /// - `size` - Maximum number of records per page
    ///
    /// # Returns
    /// - `Ok((Vec<BankServiceModel>, u64))` - Records on the page and the total record count
    /// - `Err(RepositoryError::InvalidPagination)` - `page` or `size` is 0, or the offset
    ///   overflows
    pub async fn list(
        &self,
        page: u64,
        size: u64,
    ) -> Result<(Vec<BankServiceModel>, u64), RepositoryError> {
        let skip = page
            .checked_sub(1)
            .filter(|_| size > 0)
            .and_then(|page_index| page_index.checked_mul(size))
            .ok_or(RepositoryError::InvalidPagination { page, size })?;

        let collection = self.collection();
        let banks = collection
            .find(doc! {}, FindOptions::new().skip(skip).limit(size))
            .await?
            .into_iter()
            .map(bson::from_document)
            .collect::<Result<Vec<BankServiceModel>, _>>()?;

        let total = collection.count(doc! {}).await?;

        Ok((banks, total))
    }

    async fn find_one(&self, filter: Document) -> Result<BankServiceModel, RepositoryError> {
        let document = self
            .collection()
            .find_one(filter)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(bson::from_document(document)?)
    }
}
