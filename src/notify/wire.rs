use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SendMessageEnvelope {
    pub(crate) ok: bool,
    pub(crate) description: Option<String>,
    pub(crate) result: Option<SentMessage>,
}

#[derive(Deserialize)]
pub(crate) struct SentMessage {
    pub(crate) message_id: i64,
}
