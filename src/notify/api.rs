use crate::{
    core::{
        AlertClient, AlertError,
        net::{self, Request},
    },
    notify::{ParseMode, model::MessageAck, wire},
};

pub(super) async fn send_message(
    client: &AlertClient,
    chat_id: &str,
    text: &str,
    parse_mode: Option<ParseMode>,
) -> Result<MessageAck, AlertError> {
    let bot = format!("bot{}", client.settings().bot_token);
    let url = net::endpoint(client.base_telegram(), &[bot.as_str(), "sendMessage"])?;

    let mut req = Request::post(url).param("chat_id", chat_id).param("text", text);
    if let Some(mode) = parse_mode {
        req = req.param("parse_mode", mode.as_str());
    }

    let envelope: wire::SendMessageEnvelope = net::send_json(client, req).await?;

    if !envelope.ok {
        return Err(AlertError::Api {
            service: "telegram",
            message: envelope.description.unwrap_or_default(),
        });
    }

    let sent = envelope
        .result
        .ok_or_else(|| AlertError::Data("sendMessage returned no result".into()))?;

    Ok(MessageAck {
        message_id: sent.message_id,
    })
}
