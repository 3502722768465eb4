//! Wire types for `POST /v1/chat/completions`

use serde::{Deserialize, Serialize};

use dine_core::{ChatMessage, ChatRequest};

#[derive(Debug, Serialize)]
pub(super) struct CompletionRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: &'a [ChatMessage],
    pub(super) temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) max_tokens: Option<u32>,
}

impl<'a> CompletionRequestDto<'a> {
    pub(super) fn new(model: &'a str, request: &'a ChatRequest) -> Self {
        Self {
            model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChoiceDto {
    pub(super) message: Option<ReplyDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReplyDto {
    pub(super) content: Option<String>,
}

impl CompletionResponseDto {
    /// Trimmed text of the first choice, if any
    pub(super) fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}
