use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A bank service listed on the dashboard.
///
/// `name` is the business key. Its uniqueness is only checked by the repository before
/// inserting, the collection itself carries no unique index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Store-assigned identifier, absent until the record has been inserted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub details: String,
    pub number_of_users: i64,
    pub status: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub icon: String,
}

/// Partial set of bank service fields to overwrite.
///
/// Only fields that are `Some` end up in the `$set` document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_users: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BankUpdate {
    /// Builds the `$set` payload from the provided fields.
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.details.is_none()
            && self.number_of_users.is_none()
            && self.status.is_none()
            && self.service_type.is_none()
            && self.icon.is_none()
    }
}
