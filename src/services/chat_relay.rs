// src/services/chat_relay.rs
use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    error::GenerationError,
    message::{ChatResponse, HistoryEntry, Location, ProbeResponse, iso_timestamp},
};

use super::{
    deadline::{Deadline, DeadlineError},
    generator::TextGenerator,
    prompt::build_prompt,
    rules,
};

pub const PROBE_PROMPT: &str = r#"Hello, please respond with "DPAI connection successful""#;

/// Forwards chat messages to the generator and masks every failure behind an offline reply.
#[derive(Clone)]
pub struct ChatRelay {
    generator: Arc<dyn TextGenerator>,
    deadline: Deadline,
}

impl ChatRelay {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, deadline: Deadline::new(timeout) }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// One generation call bounded by the deadline. A timeout is just another failure.
    pub async fn generate(&self, prompt: String) -> Result<String, GenerationError> {
        let generator = Arc::clone(&self.generator);
        let outcome = self
            .deadline
            .run(async move { generator.generate(&prompt).await })
            .await;

        match outcome {
            Ok(result) => result,
            Err(DeadlineError::Elapsed(limit)) => Err(GenerationError::Timeout(limit)),
            Err(DeadlineError::Failed(reason)) => Err(GenerationError::TaskFailed(reason)),
        }
    }

    /// Always success-shaped. `fallback` is set when the reply is canned text.
    pub async fn respond(
        &self,
        message: &str,
        location: Option<&Location>,
        history: &[HistoryEntry],
    ) -> ChatResponse {
        let prompt = build_prompt(message, location, history);
        debug!(prompt_len = prompt.len(), model = %self.model(), "sending prompt");

        match self.generate(prompt).await {
            Ok(text) => {
                let reply = text.trim().to_string();
                info!(reply_len = reply.len(), "generation succeeded");
                ChatResponse {
                    success: true,
                    response: reply,
                    suggestions: rules::suggestions_for(message),
                    timestamp: iso_timestamp(),
                    fallback: None,
                    session_id: None,
                }
            }
            Err(err) => {
                warn!(error = %err, "generation failed, using offline reply");
                ChatResponse {
                    success: true,
                    response: rules::fallback_reply(message).to_string(),
                    suggestions: rules::fallback_suggestions(),
                    timestamp: iso_timestamp(),
                    fallback: Some(true),
                    session_id: None,
                }
            }
        }
    }

    pub async fn probe(&self) -> ProbeResponse {
        info!(model = %self.model(), "probing generation service");
        match self.generate(PROBE_PROMPT.to_string()).await {
            Ok(text) => ProbeResponse {
                success: true,
                message: "Gemini AI connection successful".to_string(),
                response: Some(text),
                error: None,
                timestamp: iso_timestamp(),
            },
            Err(err) => {
                warn!(error = %err, "generation service probe failed");
                ProbeResponse {
                    success: false,
                    message: "Gemini AI connection failed".to_string(),
                    response: None,
                    error: Some(err.to_string()),
                    timestamp: iso_timestamp(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording {
        reply: Result<&'static str, ()>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for Recording {
        fn model(&self) -> &str {
            "test-model"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.map(str::to_string).map_err(|_| GenerationError::EmptyResponse)
        }
    }

    fn relay(reply: Result<&'static str, ()>) -> (ChatRelay, Arc<Recording>) {
        let generator = Arc::new(Recording { reply, prompts: Mutex::new(Vec::new()) });
        (ChatRelay::new(generator.clone(), Duration::from_secs(1)), generator)
    }

    #[tokio::test]
    async fn success_is_trimmed_and_unflagged() {
        let (relay, generator) = relay(Ok("  Seek higher ground.\n"));
        let resp = relay.respond("flood in Sylhet", None, &[]).await;

        assert!(resp.success);
        assert_eq!(resp.response, "Seek higher ground.");
        assert_eq!(resp.fallback, None);
        assert_eq!(resp.suggestions[0], "What are the flood-prone areas in Bangladesh?");

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].ends_with("User's current message: flood in Sylhet"));
    }

    #[tokio::test]
    async fn failure_becomes_flagged_fallback() {
        let (relay, _) = relay(Err(()));
        let resp = relay.respond("cyclone warning", None, &[]).await;

        assert!(resp.success);
        assert_eq!(resp.fallback, Some(true));
        assert!(resp.response.starts_with("Cyclone Safety (Offline Mode)"));
        assert_eq!(resp.suggestions, rules::fallback_suggestions());
    }

    #[tokio::test]
    async fn probe_reports_failure_reason() {
        let (relay, _) = relay(Err(()));
        let probe = relay.probe().await;
        assert!(!probe.success);
        assert_eq!(probe.message, "Gemini AI connection failed");
        assert_eq!(probe.error.as_deref(), Some("generation service returned no text"));
    }
}
