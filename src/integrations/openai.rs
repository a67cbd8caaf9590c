use crate::error::{AppError, Result};
use crate::services::intent_extractor::GenerationService;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl OpenAiClient {
    /// Builds a chat-completions client.
    ///
    /// Only the connect phase is bounded; request deadlines are left to callers.
    pub fn new(api_key: String, api_url: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::Internal(format!("OpenAI HTTP client init failed: {}", e)))?;
        Ok(Self {
            api_key,
            api_url,
            model,
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn completions_url(&self) -> Result<Url> {
        Url::parse(&format!(
            "{}/chat/completions",
            self.api_url.trim_end_matches('/')
        ))
        .map_err(|e| AppError::Internal(format!("Invalid OpenAI URL: {}", e)))
    }
}

#[async_trait::async_trait]
impl GenerationService for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(AppError::ExternalAPI(
                "OpenAI API key is not configured".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.completions_url()?)
            .bearer_auth(self.api_key.trim())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalAPI(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalAPI(format!(
                "OpenAI returned {}: {}",
                status,
                truncate(&body, 300)
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalAPI(format!("OpenAI response parse failed: {}", e)))?;

        completion_text(&body).ok_or_else(|| {
            AppError::ExternalAPI("OpenAI response has no message content".to_string())
        })
    }
}

fn completion_text(body: &Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
