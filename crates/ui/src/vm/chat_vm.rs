use services::{ChatMessage, ChatRole};

use crate::vm::time_fmt::format_clock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageVm {
    pub id: u64,
    pub from_user: bool,
    pub content: String,
    pub time: String,
    pub actions: bool,
}

#[must_use]
pub fn map_chat(messages: &[ChatMessage]) -> Vec<ChatMessageVm> {
    messages
        .iter()
        .map(|message| ChatMessageVm {
            id: message.id,
            from_user: message.role == ChatRole::User,
            content: message.content.clone(),
            time: format_clock(message.sent_at),
            actions: message.offers_actions(),
        })
        .collect()
}
