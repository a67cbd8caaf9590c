use crate::{
    constants::{ANSWER_UNAVAILABLE, BRIAN_DEFAULT_RESPONSE},
    error::{AppError, Result},
    integrations::BrianClient,
    models::ChatMessage,
    prompts::format_ask_agent_prompt,
    services::intent_extractor::{flatten_history, GenerationService},
};
use std::sync::Arc;

/// Answers prompts that are not transaction intents.
#[async_trait::async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Always yields user-facing text; failures become a fixed apology.
    async fn answer(&self, prompt: &str, history: &[ChatMessage]) -> String;
}

/// Brian knowledge lookup phrased by the generation service.
pub struct BrianKnowledgeBase {
    brian: BrianClient,
    generator: Arc<dyn GenerationService>,
}

impl BrianKnowledgeBase {
    pub fn new(brian: BrianClient, generator: Arc<dyn GenerationService>) -> Self {
        Self { brian, generator }
    }

    async fn try_answer(&self, prompt: &str, history: &[ChatMessage]) -> Result<String> {
        if !self.brian.is_configured() {
            return Err(AppError::ExternalAPI(
                "Knowledge base is not configured".to_string(),
            ));
        }
        let knowledge = self
            .brian
            .ask(prompt)
            .await?
            .unwrap_or_else(|| BRIAN_DEFAULT_RESPONSE.to_string());
        let request = build_answer_request(&knowledge, prompt, history);
        self.generator.complete(&request).await
    }
}

#[async_trait::async_trait]
impl KnowledgeBase for BrianKnowledgeBase {
    async fn answer(&self, prompt: &str, history: &[ChatMessage]) -> String {
        match self.try_answer(prompt, history).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Knowledge base answer failed: {}", e);
                ANSWER_UNAVAILABLE.to_string()
            }
        }
    }
}

// Internal helper that builds inputs for the answer completion.
fn build_answer_request(knowledge: &str, prompt: &str, history: &[ChatMessage]) -> String {
    let mut request = format_ask_agent_prompt(knowledge);
    if !history.is_empty() {
        request.push_str("\n\nChat history:\n");
        request.push_str(&flatten_history(history));
    }
    request.push_str("\n\nuser: ");
    request.push_str(prompt);
    request
}
