use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::logging::LogHandle;
use crate::openai::ChatCompletionRequest;
use crate::server::AppState;
use crate::server::synthesizer::synthesize;

/// Parses `body` as a chat completion request and answers with the canned
/// completion, appending it to the request's record when there is one.
pub(crate) async fn chat_completions(
    app_state: &AppState,
    body: &[u8],
    record: Option<&LogHandle>,
) -> Result<Response> {
    let request: ChatCompletionRequest = serde_json::from_slice(body)?;
    let model = request.model_name();
    tracing::debug!(model = %model, messages = request.message_count(), "chat completion request");

    let last: Vec<_> = request.last_message()?.into_iter().collect();
    let response = synthesize(&last, &model);

    if let Some(handle) = record {
        if let Err(e) = app_state.log_store.append_response(handle, &response).await {
            tracing::error!(record = %handle.id, error = %e, "Failed to append simulated response");
            if app_state.config.logging.strict {
                return Err(e);
            }
        }
    }

    Ok((app_state.cors.headers(), Json(response)).into_response())
}
