//! Message entity <-> model mapper

use bmg_core::entities::Message;
use bmg_core::value_objects::Snowflake;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            recipient_id: Snowflake::new(model.recipient_id),
            body: model.body,
            read: model.read,
            created_at: model.created_at,
        }
    }
}
