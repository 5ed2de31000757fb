/// Delivery receipt for a sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageAck {
    /// Identifier Telegram assigned to the message within its chat.
    pub message_id: i64,
}
