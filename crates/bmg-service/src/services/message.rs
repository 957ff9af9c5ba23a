//! Message service
//!
//! Store-and-fetch landlord/tenant correspondence. No realtime delivery.

use bmg_core::entities::Message;
use bmg_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::invitation::parse_id;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to another user
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        sender_id: Snowflake,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let recipient_id = parse_id(&request.recipient_id, "recipient_id")?;

        if recipient_id == sender_id {
            return Err(ServiceError::validation("Cannot message yourself"));
        }

        // Recipient must exist
        self.ctx
            .user_repo()
            .find_by_id(recipient_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", recipient_id.to_string()))?;

        let message = Message::new(self.ctx.generate_id(), sender_id, recipient_id, request.body);

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, recipient_id = %recipient_id, "Message sent");

        Ok(MessageResponse::from(message))
    }

    /// Fetch the conversation between the caller and another user
    #[instrument(skip(self))]
    pub async fn get_conversation(
        &self,
        user_id: Snowflake,
        with: Snowflake,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self.ctx.message_repo().conversation(user_id, with).await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Mark a received message read (recipient only)
    #[instrument(skip(self))]
    pub async fn mark_read(&self, message_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let marked = self.ctx.message_repo().mark_read(message_id, user_id).await?;

        if !marked {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        Ok(())
    }
}
