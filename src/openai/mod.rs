pub mod types;

pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, DEFAULT_MODEL, Model,
    ModelListResponse, Usage,
};
