//! Typed inbound events and outbound replies.
//!
//! Handlers only read the sender, the chat and the text of a Telegram
//! message; `ChatEvent` carries exactly that.

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dispatcher::ThrottledBot;

/// The parts of an incoming message the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    pub user_id: u64,
    pub chat_id: ChatId,
    pub text: String,
}

impl ChatEvent {
    /// Extract the event; `None` for messages without a sender (channel posts).
    pub fn from_message(msg: &Message) -> Option<Self> {
        let user = msg.from.as_ref()?;
        Some(Self {
            user_id: user.id.0,
            chat_id: msg.chat.id,
            text: msg.text().unwrap_or_default().to_string(),
        })
    }

    /// Send a reply into the event's chat.
    pub async fn respond(&self, bot: &ThrottledBot, reply: Reply) -> anyhow::Result<()> {
        let mut request = bot.send_message(self.chat_id, reply.text);
        if reply.html {
            request = request.parse_mode(ParseMode::Html);
        }
        request.await?;
        Ok(())
    }
}

/// Text to send back, plain or HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: true,
        }
    }
}
