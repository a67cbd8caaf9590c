use crate::constants::{
    DEFAULT_BRIAN_API_URL, DEFAULT_CHAIN_ID, DEFAULT_INTENT_TIMEOUT_SECS, DEFAULT_KNOWLEDGE_BASE,
    DEFAULT_OPENAI_API_URL, DEFAULT_OPENAI_MODEL,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // Generation service
    pub openai_api_key: Option<String>,
    pub openai_api_url: String,
    pub openai_model: String,

    // Knowledge base
    pub brian_api_key: Option<String>,
    pub brian_api_url: String,
    pub brian_knowledge_base: String,

    // Intent pipeline
    pub default_chain_id: String,
    pub intent_timeout_secs: u64,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()?,

            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),

            brian_api_key: non_empty_var("BRIAN_API_KEY"),
            brian_api_url: env::var("BRIAN_API_URL")
                .unwrap_or_else(|_| DEFAULT_BRIAN_API_URL.to_string()),
            brian_knowledge_base: env::var("BRIAN_KNOWLEDGE_BASE")
                .unwrap_or_else(|_| DEFAULT_KNOWLEDGE_BASE.to_string()),

            default_chain_id: env::var("DEFAULT_CHAIN_ID")
                .unwrap_or_else(|_| DEFAULT_CHAIN_ID.to_string()),
            intent_timeout_secs: env::var("INTENT_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_INTENT_TIMEOUT_SECS),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is empty");
        }
        if self.openai_api_url.trim().is_empty() {
            anyhow::bail!("OPENAI_API_URL is empty");
        }
        if self.default_chain_id.trim().is_empty() {
            anyhow::bail!("DEFAULT_CHAIN_ID is empty");
        }

        if self.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; every prompt will fall back to the knowledge base");
        }
        if self.brian_api_key.is_none() {
            tracing::warn!("BRIAN_API_KEY is not set; knowledge-base answers will be unavailable");
        }
        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }

    pub fn has_llm_provider(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

// Internal helper that treats blank variables as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        environment: "development".to_string(),
        database_url: "postgres://localhost/intent_resolver".to_string(),
        database_max_connections: 1,
        openai_api_key: Some("sk-test".to_string()),
        openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
        openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        brian_api_key: None,
        brian_api_url: DEFAULT_BRIAN_API_URL.to_string(),
        brian_knowledge_base: DEFAULT_KNOWLEDGE_BASE.to_string(),
        default_chain_id: DEFAULT_CHAIN_ID.to_string(),
        intent_timeout_secs: DEFAULT_INTENT_TIMEOUT_SECS,
        cors_allowed_origins: "*".to_string(),
    }
}
