use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MockError, Result};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

/// Only the fields the mock reads; anything else in the body is ignored.
///
/// Fields stay loosely typed: clients send `null` content with `tool_calls`,
/// content-part arrays and the like, and only the last message is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionRequest {
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default)]
    pub messages: Option<Vec<Value>>,
}

impl ChatCompletionRequest {
    /// `model` as text; absent or `null` falls back to [`DEFAULT_MODEL`].
    pub fn model_name(&self) -> String {
        match &self.model {
            None | Some(Value::Null) => DEFAULT_MODEL.to_string(),
            Some(v) => value_as_text(v),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.as_ref().map_or(0, Vec::len)
    }

    /// The last message, with its content rendered as text.
    ///
    /// `Ok(None)` when there are no messages. Earlier messages are never
    /// inspected; a last message without `content` is an error.
    pub fn last_message(&self) -> Result<Option<ChatMessage>> {
        let Some(last) = self.messages.as_deref().and_then(<[Value]>::last) else {
            return Ok(None);
        };
        let fields = last
            .as_object()
            .ok_or_else(|| MockError::InvalidRequest("last message is not an object".into()))?;
        let content = fields
            .get("content")
            .ok_or_else(|| MockError::InvalidRequest("last message has no 'content'".into()))?;
        let role = fields
            .get("role")
            .map(value_as_text)
            .unwrap_or_default();
        Ok(Some(ChatMessage {
            role,
            content: value_as_text(content),
        }))
    }
}

/// Strings are used verbatim, any other JSON value as its JSON text.
fn value_as_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// 模型列表：字段顺序与上游一致（data 在前）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub data: Vec<Model>,
    pub object: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub owned_by: String,
    pub permission: Vec<serde_json::Value>,
    pub root: String,
    pub parent: Option<String>,
}
