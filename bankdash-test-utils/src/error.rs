use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    StoreError(#[from] docstore::StoreError),
    #[error(transparent)]
    EncodeError(#[from] bson::ser::Error),
    #[error(transparent)]
    DecodeError(#[from] bson::de::Error),
}
