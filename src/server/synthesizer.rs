use chrono::{DateTime, Local};

use crate::logging::time::compact_stamp;
use crate::openai::{ChatCompletionResponse, ChatMessage, Choice, Usage};

pub const COMPLETION_ID_PREFIX: &str = "chatcmpl-";

// 固定的 usage，不做真实计数
pub const CANNED_USAGE: Usage = Usage {
    prompt_tokens: 10,
    completion_tokens: 20,
    total_tokens: 30,
};

pub fn synthesize(messages: &[ChatMessage], model: &str) -> ChatCompletionResponse {
    synthesize_at(messages, model, Local::now())
}

/// Builds the canned completion for `messages` as of `now`.
///
/// The reply quotes the content of the last message, or an empty string
/// when there are no messages.
pub fn synthesize_at(
    messages: &[ChatMessage],
    model: &str,
    now: DateTime<Local>,
) -> ChatCompletionResponse {
    let last_content = messages.last().map(|m| m.content.as_str()).unwrap_or("");

    ChatCompletionResponse {
        id: format!("{COMPLETION_ID_PREFIX}{}", compact_stamp(&now)),
        object: "chat.completion".to_string(),
        created: now.timestamp(),
        model: model.to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: format!("This is a simulated response using {model} to '{last_content}'."),
            },
            finish_reason: "stop".to_string(),
        }],
        usage: CANNED_USAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.into(),
            content: content.into(),
        }
    }

    #[test]
    fn reply_quotes_last_message_and_model() {
        let messages = vec![msg("system", "be brief"), msg("user", "what is rust?")];
        let res = synthesize(&messages, "gpt-4o-mini");
        let content = &res.choices[0].message.content;
        assert_eq!(
            content,
            "This is a simulated response using gpt-4o-mini to 'what is rust?'."
        );
        assert!(!content.contains("be brief"));
        assert_eq!(res.model, "gpt-4o-mini");
    }

    #[test]
    fn empty_messages_quote_empty_string() {
        let res = synthesize(&[], "gpt-4");
        assert_eq!(
            res.choices[0].message.content,
            "This is a simulated response using gpt-4 to ''."
        );
    }

    #[test]
    fn id_and_created_come_from_clock() {
        let now = Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let res = synthesize_at(&[msg("user", "hi")], "gpt-4", now);
        assert_eq!(res.id, "chatcmpl-20260304050607");
        assert_eq!(res.created, now.timestamp());
        assert_eq!(res.object, "chat.completion");
    }

    #[test]
    fn single_stop_choice_with_fixed_usage() {
        let res = synthesize(&[msg("user", "a much longer prompt than usual")], "gpt-4");
        assert_eq!(res.choices.len(), 1);
        let choice = &res.choices[0];
        assert_eq!(choice.index, 0);
        assert_eq!(choice.message.role, "assistant");
        assert_eq!(choice.finish_reason, "stop");
        assert_eq!(res.usage, CANNED_USAGE);
        assert_eq!(res.usage.total_tokens, 30);
    }
}
