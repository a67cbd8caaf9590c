use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::{
    constants::CHAT_TYPE_TRANSACTION,
    error::{AppError, Result},
    models::{
        Action, BridgeDetails, ChatMessage, ContractCall, ProcessedTransaction, TokenDescriptor,
        TransactionIntent,
    },
    services::IntentExtractor,
};

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub prompt: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// String or number; anything else falls back to the configured chain.
    pub chain_id: Option<Value>,
}

#[derive(Debug)]
struct ValidatedRequest {
    prompt: String,
    address: String,
    messages: Vec<ChatMessage>,
    chain_id: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub result: Vec<ResultEntry>,
}

#[derive(Debug, Serialize)]
pub struct ResultEntry {
    pub data: ResultData,
    #[serde(rename = "conversationHistory")]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResultData {
    Question {
        #[serde(rename = "type")]
        kind: &'static str,
        answer: String,
    },
    Transaction {
        description: String,
        transaction: TransactionEnvelope,
    },
}

#[derive(Debug, Serialize)]
pub struct TransactionEnvelope {
    #[serde(rename = "type")]
    pub kind: Action,
    pub data: TransactionView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub transactions: Vec<ContractCall>,
    pub from_token: Option<TokenDescriptor>,
    pub to_token: Option<TokenDescriptor>,
    pub from_amount: Option<String>,
    pub to_amount: Option<String>,
    pub receiver: Option<String>,
    #[serde(rename = "gasCostUSD")]
    pub gas_cost_usd: Option<String>,
    pub solver: String,
    pub protocol: Option<String>,
    pub bridge: Option<BridgeDetails>,
}

// Internal helper that validates the request body and applies defaults.
fn validate_request(req: TransactionRequest, default_chain_id: &str) -> Result<ValidatedRequest> {
    let prompt = req.prompt.unwrap_or_default();
    let address = req.address.unwrap_or_default();
    if prompt.trim().is_empty() || address.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Missing required parameters (prompt or address)".to_string(),
        ));
    }

    let chain_id = match req.chain_id {
        Some(Value::String(id)) => id.trim().to_string(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };
    let chain_id = if chain_id.is_empty() {
        default_chain_id.to_string()
    } else {
        chain_id
    };

    Ok(ValidatedRequest {
        prompt,
        address: address.trim().to_string(),
        messages: req.messages,
        chain_id,
    })
}

fn question_response(answer: String, history: Vec<ChatMessage>) -> TransactionResponse {
    TransactionResponse {
        result: vec![ResultEntry {
            data: ResultData::Question {
                kind: "question",
                answer,
            },
            conversation_history: history,
        }],
    }
}

fn transaction_response(
    processed: ProcessedTransaction,
    history: Vec<ChatMessage>,
) -> TransactionResponse {
    TransactionResponse {
        result: vec![ResultEntry {
            data: ResultData::Transaction {
                description: processed.description,
                transaction: TransactionEnvelope {
                    kind: processed.action,
                    data: TransactionView {
                        transactions: processed.transactions,
                        from_token: processed.from_token,
                        to_token: processed.to_token,
                        from_amount: processed.from_amount,
                        to_amount: processed.to_amount,
                        receiver: processed.receiver,
                        gas_cost_usd: processed.estimated_gas,
                        solver: processed.solver,
                        protocol: processed.protocol,
                        bridge: processed.bridge,
                    },
                },
            },
            conversation_history: history,
        }],
    }
}

/// Processed result plus the request chain and the intent it came from.
fn transaction_metadata(
    processed: &ProcessedTransaction,
    chain_id: &str,
    intent: &TransactionIntent,
) -> Result<serde_json::Value> {
    let mut metadata = serde_json::to_value(processed)
        .map_err(|e| AppError::Internal(format!("Failed to encode transaction: {}", e)))?;
    let original_intent = serde_json::to_value(intent)
        .map_err(|e| AppError::Internal(format!("Failed to encode intent: {}", e)))?;

    let object = metadata
        .as_object_mut()
        .ok_or_else(|| AppError::Internal("Processed transaction is not an object".to_string()))?;
    object.insert("chainId".to_string(), json!(chain_id));
    object.insert("originalIntent".to_string(), original_intent);
    Ok(metadata)
}

// A deadline miss is treated like "no intent".
async fn extract_with_deadline(
    extractor: &IntentExtractor,
    req: &ValidatedRequest,
    deadline: Duration,
) -> Option<TransactionIntent> {
    let extraction = extractor.extract(&req.prompt, &req.address, &req.chain_id, &req.messages);

    match tokio::time::timeout(deadline, extraction).await {
        Ok(intent) => intent,
        Err(_) => {
            tracing::warn!(
                "Intent extraction timed out after {}ms; falling back to knowledge base",
                deadline.as_millis()
            );
            None
        }
    }
}

/// Deposits and withdrawals always pay out to the requesting wallet.
fn apply_receiver_override(processed: &mut ProcessedTransaction, action: Action, address: &str) {
    if action.is_vault_action() {
        processed.receiver = Some(address.to_string());
    }
}

/// POST /api/transactions
pub async fn resolve_transaction(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<Json<TransactionResponse>> {
    let Json(body) = payload?;
    let req = validate_request(body, &state.config.default_chain_id)?;

    let user = state.db.find_or_create_user(&req.address).await?;
    let chat = state.db.create_chat(user.id, CHAT_TYPE_TRANSACTION).await?;

    let deadline = Duration::from_secs(state.config.intent_timeout_secs);
    let intent = extract_with_deadline(&state.extractor, &req, deadline).await;

    state
        .db
        .store_message(
            chat.id,
            user.id,
            &json!([{ "role": "user", "content": req.prompt }]),
        )
        .await?;

    let Some(intent) = intent else {
        let answer = state.knowledge.answer(&req.prompt, &req.messages).await;
        state
            .db
            .store_message(
                chat.id,
                user.id,
                &json!([{ "role": "assistant", "content": answer }]),
            )
            .await?;
        return Ok(Json(question_response(answer, req.messages)));
    };

    tracing::info!(
        "Transaction intent for {}: action={} solver={}",
        req.address,
        intent.action,
        intent.solver
    );

    let mut processed = state.processor.process(&intent).await.map_err(|e| {
        tracing::error!("Transaction processing error: {}", e);
        match e {
            AppError::Processing(_) => e,
            other => AppError::Processing(other.to_string()),
        }
    })?;

    apply_receiver_override(&mut processed, intent.action, &req.address);

    let metadata = transaction_metadata(&processed, &req.chain_id, &intent)?;
    let stored = state
        .db
        .store_transaction(user.id, intent.action.as_str(), &metadata)
        .await?;

    let content = serde_json::to_string(&processed)
        .map_err(|e| AppError::Internal(format!("Failed to encode transaction: {}", e)))?;
    state
        .db
        .store_message(
            chat.id,
            user.id,
            &json!([{ "role": "assistant", "content": content, "transactionId": stored.id }]),
        )
        .await?;

    Ok(Json(transaction_response(processed, req.messages)))
}
