/// Application constants

pub const API_VERSION: &str = "v1";

// Chain used when the request omits `chainId` (Starknet)
pub const DEFAULT_CHAIN_ID: &str = "4012";

// Intent recognition
pub const DEFAULT_INTENT_SOLVER: &str = "OpenAI-Intent-Recognizer";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_INTENT_TIMEOUT_SECS: u64 = 30;

// Every token is scaled as if it had 18 decimals when building calldata.
// Real token metadata is not available at this layer.
pub const ASSUMED_TOKEN_DECIMALS: u32 = 18;
// Decimals reported on the swap/transfer token descriptors.
pub const PLACEHOLDER_TOKEN_DECIMALS: u8 = 1;

// Knowledge base (Brian)
pub const DEFAULT_BRIAN_API_URL: &str = "https://api.brianknows.org/api/v0/agent/knowledge";
pub const DEFAULT_KNOWLEDGE_BASE: &str = "starknet_kb";
pub const BRIAN_DEFAULT_RESPONSE: &str = "🤖 Sorry, I don't know how to answer. The AskBrian feature allows you to ask for information on a custom-built knowledge base of resources. Contact the Brian team if you want to add new resources!";
pub const ANSWER_UNAVAILABLE: &str = "Sorry, I am unable to process your request at the moment.";

// Chat types
pub const CHAT_TYPE_TRANSACTION: &str = "TRANSACTION";
