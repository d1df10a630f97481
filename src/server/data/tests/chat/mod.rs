use bankdash_test_utils::prelude::*;
use bson::oid::ObjectId;
use entity::chat_message::ChatResponse;

use crate::server::{data::chat::ChatRepository, error::repository::RepositoryError};

mod get_history;

/// Message/response pairs of the given fixture indices
fn responses(indices: impl IntoIterator<Item = usize>) -> Vec<ChatResponse> {
    indices
        .into_iter()
        .map(|index| ChatResponse {
            message: chat_factory::mock_message_text(index),
            response: chat_factory::mock_response_text(index),
        })
        .collect()
}
