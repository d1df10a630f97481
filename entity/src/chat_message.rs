use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// One exchange in a user's chat log: the user's message and the reply it received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned identifier, absent until the record has been inserted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "_userId")]
    pub user_id: ObjectId,
    pub message: String,
    pub response: String,
    /// Eviction removes the oldest messages by this field first
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime,
}

/// The message/response pair handed back to callers of the chat log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
}

impl From<Model> for ChatResponse {
    fn from(model: Model) -> Self {
        Self {
            message: model.message,
            response: model.response,
        }
    }
}
