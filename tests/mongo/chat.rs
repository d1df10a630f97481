use bankdash::server::data::chat::ChatRepository;
use bankdash_test_utils::prelude::*;
use bson::oid::ObjectId;

use crate::util::mongo::MongoTest;

#[tokio::test]
async fn test_history_evicts_oldest_messages() {
    let mongo = MongoTest::new().await.expect("Failed to create MongoDB test");
    let repo = ChatRepository::new(
        &mongo.store,
        &mongo.config.chat_collection,
        mongo.config.chat_retention_limit,
    );
    let user_id = ObjectId::new();

    // Stored newest first so eviction has to sort by timestamp
    for index in 0..13 {
        let message = chat_factory::mock_chat_message(
            user_id,
            index,
            chat_factory::mock_time_stamp(index as i64 + 1),
        );
        repo.store_message(&message)
            .await
            .expect("Store should succeed");
    }

    let history = repo
        .get_history(&user_id.to_hex())
        .await
        .expect("History should succeed");

    assert_eq!(history.len(), TEST_RETENTION_LIMIT as usize);
    let evicted: Vec<String> = (10..13).map(chat_factory::mock_message_text).collect();
    assert!(history
        .iter()
        .all(|entry| !evicted.contains(&entry.message)));

    mongo.cleanup().await.expect("Failed to cleanup MongoDB");
}

#[tokio::test]
async fn test_evict_is_noop_at_limit() {
    let mongo = MongoTest::new().await.expect("Failed to create MongoDB test");
    let repo = ChatRepository::new(
        &mongo.store,
        &mongo.config.chat_collection,
        mongo.config.chat_retention_limit,
    );
    let user_id = ObjectId::new();

    for index in 0..TEST_RETENTION_LIMIT as usize {
        let message = chat_factory::mock_chat_message(
            user_id,
            index,
            chat_factory::mock_time_stamp(index as i64),
        );
        repo.store_message(&message)
            .await
            .expect("Store should succeed");
    }

    let evicted = repo
        .evict(&user_id.to_hex(), TEST_RETENTION_LIMIT)
        .await
        .expect("Evict should succeed");

    assert_eq!(evicted, 0);

    mongo.cleanup().await.expect("Failed to cleanup MongoDB");
}
