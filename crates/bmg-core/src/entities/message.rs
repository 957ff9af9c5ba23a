//! Message entity - direct landlord/tenant correspondence

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub recipient_id: Snowflake,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: Snowflake, sender_id: Snowflake, recipient_id: Snowflake, body: String) -> Self {
        Self {
            id,
            sender_id,
            recipient_id,
            body,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Check if `user_id` is one of the two parties
    #[inline]
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.sender_id == user_id || self.recipient_id == user_id
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_unread() {
        let mut message = Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(11),
            "Hi".to_string(),
        );
        assert!(!message.read);
        message.mark_read();
        assert!(message.read);
    }

    #[test]
    fn test_involves() {
        let message = Message::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(11),
            "Hi".to_string(),
        );
        assert!(message.involves(Snowflake::new(10)));
        assert!(message.involves(Snowflake::new(11)));
        assert!(!message.involves(Snowflake::new(12)));
    }
}
