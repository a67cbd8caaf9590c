use crate::error::{AppError, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BrianClient {
    api_key: Option<String>,
    api_url: String,
    knowledge_base: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct KnowledgeRequest<'a> {
    prompt: &'a str,
    kb: &'a str,
}

impl BrianClient {
    pub fn new(api_key: Option<String>, api_url: String, knowledge_base: String) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::Internal(format!("Brian HTTP client init failed: {}", e)))?;
        Ok(Self {
            api_key,
            api_url,
            knowledge_base,
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && !self.api_url.trim().is_empty()
    }

    /// Asks the knowledge base. `Ok(None)` when it has no answer.
    pub async fn ask(&self, prompt: &str) -> Result<Option<String>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::ExternalAPI(
                "Brian API key is not configured".to_string(),
            ));
        };

        let response = self
            .client
            .post(self.api_url.trim())
            .header("x-brian-api-key", api_key)
            .json(&KnowledgeRequest {
                prompt,
                kb: &self.knowledge_base,
            })
            .send()
            .await
            .map_err(|e| AppError::ExternalAPI(format!("Brian request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalAPI(format!(
                "Brian returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalAPI(format!("Brian response parse failed: {}", e)))?;
        Ok(knowledge_answer(&body))
    }
}

fn knowledge_answer(body: &Value) -> Option<String> {
    body.get("result")?
        .get("answer")?
        .as_str()
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .map(str::to_string)
}
