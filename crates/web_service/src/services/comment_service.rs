//! Request orchestration.
//!
//! Stateless per request: validation happened upstream, this service decides
//! which templates to run and in what order, then shapes the response.

use std::sync::Arc;

use comment_core::types::{CommentResponse, VoiceProfileResult};
use comment_core::{safe_truncate, DEFAULT_TRUNCATE_CHARS};
use llm_gateway::prompts::{self, ProfileSource};
use llm_gateway::{parse_derived_profile, CompletionClient};
use tracing::{debug, info};

use crate::error::Result;
use crate::validate::{CommentTask, ProfileInput};

pub struct CommentService {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl CommentService {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Run a validated comment task.
    ///
    /// Generation is two sequential calls (the comment depends on the
    /// summary); enhancement is one, and its response carries an empty
    /// summary. `voiceProfile` is deliberately never echoed back.
    pub async fn handle_comment(&self, task: CommentTask) -> Result<CommentResponse> {
        match task {
            CommentTask::Generate {
                content,
                voice_profile,
                regenerate,
            } => {
                let content = safe_truncate(&content, DEFAULT_TRUNCATE_CHARS);

                let summary = self
                    .client
                    .complete(
                        &self.model,
                        &prompts::summarize(&content),
                        prompts::SUMMARIZE_TEMPERATURE,
                    )
                    .await?;
                debug!(chars = summary.chars().count(), "summary generated");

                let comment = self
                    .client
                    .complete(
                        &self.model,
                        &prompts::generate_comment(&summary, voice_profile.as_deref(), regenerate),
                        prompts::COMMENT_TEMPERATURE,
                    )
                    .await?;
                info!("comment generated");

                Ok(CommentResponse {
                    summary,
                    comment,
                    voice_profile: None,
                })
            }
            CommentTask::Enhance {
                draft,
                voice_profile,
                regenerate,
            } => {
                let comment = self
                    .client
                    .complete(
                        &self.model,
                        &prompts::enhance_draft(&draft, voice_profile.as_deref(), regenerate),
                        prompts::ENHANCE_TEMPERATURE,
                    )
                    .await?;
                info!("draft enhanced");

                Ok(CommentResponse {
                    summary: String::new(),
                    comment,
                    voice_profile: None,
                })
            }
        }
    }

    /// Derive a `{name, profile}` voice from a description or samples. The
    /// label parse never fails; malformed completions degrade to fallbacks.
    pub async fn derive_voice_profile(&self, input: ProfileInput) -> Result<VoiceProfileResult> {
        let (turns, description) = match &input {
            ProfileInput::Description(description) => (
                prompts::derive_voice_profile(&ProfileSource::Description(description)),
                Some(description.as_str()),
            ),
            ProfileInput::Samples(samples) => (
                prompts::derive_voice_profile(&ProfileSource::Samples(samples)),
                None,
            ),
        };

        let raw = self
            .client
            .complete(&self.model, &turns, prompts::PROFILE_TEMPERATURE)
            .await?;

        Ok(parse_derived_profile(&raw, description))
    }
}
