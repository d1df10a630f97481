//! Database model type aliases.
//!
//! Convenient aliases for the document models defined in the `entity` crate, so signatures
//! across the data layer stay short.

/// Type alias for the bank service document model.
///
/// # Fields (from `entity::bank_service::Model`)
/// - `id` - Store-assigned object id, `None` before insertion
/// - `name` - Business key, checked for uniqueness on create
/// - `details` - Free-form description
/// - `number_of_users` - Number of users of the service
/// - `status` - Opaque application status
/// - `service_type` - Stored as `type`
/// - `icon` - Icon reference
pub type BankServiceModel = entity::bank_service::Model;

/// Type alias for the chat message document model.
///
/// # Fields (from `entity::chat_message::Model`)
/// - `id` - Store-assigned object id, `None` before insertion
/// - `user_id` - Owning user, stored as `_userId`
/// - `message` - Text sent by the user
/// - `response` - Reply to the message
/// - `time_stamp` - When the message was sent, stored as `timeStamp`
pub type ChatMessageModel = entity::chat_message::Model;
