//! Narrative generation from a compiled prompt.
//!
//! The model is opaque to the rest of the system: a prompt goes in and a
//! narrative (or an error) comes out. [`NoteGenerator`] is that contract;
//! [`BedrockNoteGenerator`] fulfils it with the Converse API.

use std::sync::Arc;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use futures::future::BoxFuture;
use tracing::info;
use uuid::Uuid;

use flonotes_core::models::note::GeneratedNote;
use flonotes_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::tokens;

const NOTE_SYSTEM_PROMPT: &str = "\
You are a clinical documentation assistant for a behavioral health program. \
Write progress notes in a professional, objective clinical voice. \
Use only the observations you are given and do not invent events, \
diagnoses, or medications. Return only the note text.";

/// Anything that can turn a prompt into a narrative.
///
/// Object-safe so callers can hold an `Arc<dyn NoteGenerator>`.
pub trait NoteGenerator: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str)
        -> BoxFuture<'a, Result<GeneratedNote, BedrockError>>;
}

impl<G: NoteGenerator + ?Sized> NoteGenerator for Arc<G> {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<GeneratedNote, BedrockError>> {
        (**self).generate(prompt)
    }
}

/// Generates notes with a Claude model on Bedrock.
#[derive(Clone)]
pub struct BedrockNoteGenerator {
    client: Client,
    model_id: String,
}

impl BedrockNoteGenerator {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub fn from_config(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::new(Client::new(config), model_id)
    }

    /// Send `prompt` as the single user message and collect the reply.
    pub async fn generate_note(&self, prompt: &str) -> Result<GeneratedNote, BedrockError> {
        if prompt.trim().is_empty() {
            return Err(BedrockError::EmptyPrompt);
        }

        let generation_id = Uuid::new_v4();
        info!(
            generation_id = %generation_id,
            model = %self.model_id,
            prompt_len = prompt.len(),
            "starting note generation"
        );

        let (narrative, token_count) = invoke_converse(&self.client, &self.model_id, prompt).await?;
        let narrative = narrative.trim().to_string();
        if narrative.is_empty() {
            return Err(BedrockError::ResponseParse(
                "model returned no text".to_string(),
            ));
        }

        let usage = tokens::calculate_usage(&self.model_id, token_count);

        info!(
            generation_id = %generation_id,
            input_tokens = usage.tokens.input,
            output_tokens = usage.tokens.output,
            cost_usd = usage.cost_usd,
            narrative_len = narrative.len(),
            "note generation complete"
        );

        Ok(GeneratedNote {
            id: generation_id,
            narrative,
            model_id: self.model_id.clone(),
            usage,
            created_at: jiff::Timestamp::now(),
        })
    }
}

impl NoteGenerator for BedrockNoteGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<GeneratedNote, BedrockError>> {
        Box::pin(self.generate_note(prompt))
    }
}

/// Core invocation using the Bedrock Converse API.
/// Returns the concatenated response text and token counts.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    user_message: &str,
) -> Result<(String, TokenCount), BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(NOTE_SYSTEM_PROMPT.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let token_count = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or_default();

    Ok((response_text, token_count))
}
