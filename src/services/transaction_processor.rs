use crate::{
    error::{AppError, Result},
    models::{ProcessedTransaction, TransactionData, TransactionIntent},
};

/// Downstream consumer of recognized intents.
#[async_trait::async_trait]
pub trait TransactionProcessor: Send + Sync {
    async fn process(&self, intent: &TransactionIntent) -> Result<ProcessedTransaction>;
}

/// Builds the client-facing transaction directly from the intent payload.
#[derive(Debug, Clone, Default)]
pub struct IntentProcessor;

impl IntentProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TransactionProcessor for IntentProcessor {
    async fn process(&self, intent: &TransactionIntent) -> Result<ProcessedTransaction> {
        let processed = match &intent.data {
            TransactionData::SwapOrTransfer(data) => {
                if data.from_token.symbol.is_empty() {
                    return Err(AppError::Processing(format!(
                        "{} intent is missing the source token",
                        intent.action
                    )));
                }
                ProcessedTransaction {
                    action: intent.action,
                    description: data.description.clone(),
                    transactions: data.steps.clone(),
                    from_token: Some(data.from_token.clone()),
                    to_token: Some(data.to_token.clone()),
                    from_amount: Some(data.from_amount.clone()),
                    to_amount: Some(data.to_amount.clone()),
                    receiver: Some(data.receiver.clone()),
                    estimated_gas: data.gas_cost_usd.clone(),
                    solver: intent.solver.clone(),
                    protocol: None,
                    bridge: None,
                }
            }
            TransactionData::Bridge(data) => ProcessedTransaction {
                action: intent.action,
                description: data.description.clone(),
                transactions: data.steps.clone(),
                from_token: None,
                to_token: None,
                from_amount: Some(data.bridge.amount.to_string()),
                to_amount: Some(data.bridge.amount.to_string()),
                receiver: Some(data.bridge.destination_address.clone()),
                estimated_gas: None,
                solver: intent.solver.clone(),
                protocol: None,
                bridge: Some(data.bridge.clone()),
            },
            TransactionData::Vault(data) => ProcessedTransaction {
                action: intent.action,
                description: data.description.clone(),
                transactions: data.steps.clone(),
                from_token: None,
                to_token: None,
                from_amount: Some(data.from_amount.clone()),
                to_amount: Some(data.to_amount.clone()),
                receiver: Some(data.receiver.clone()),
                estimated_gas: None,
                solver: intent.solver.clone(),
                protocol: Some(data.protocol.clone()),
                bridge: None,
            },
        };

        tracing::debug!(
            "Processed {} intent into {} call(s)",
            processed.action,
            processed.transactions.len()
        );
        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::intent_extractor::parse_model_output;
    use serde_json::json;

    fn intent_from(body: serde_json::Value) -> TransactionIntent {
        parse_model_output(&body.to_string(), "0xwallet")
            .expect("valid output")
            .expect("intent")
    }

    #[tokio::test]
    async fn swap_steps_become_transactions() {
        let intent = intent_from(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": {
                "token1": "ETH",
                "token2": "STRK",
                "amount": "1",
                "transaction": { "contractAddress": "0xC", "entrypoint": "swap", "calldata": ["x"] }
            },
            "data": { "gasCostUSD": "0.1" }
        }));
        let processed = IntentProcessor::new().process(&intent).await.expect("processed");
        assert_eq!(processed.transactions.len(), 1);
        assert_eq!(processed.estimated_gas.as_deref(), Some("0.1"));
        assert_eq!(processed.receiver.as_deref(), Some("0xwallet"));
        assert!(processed.bridge.is_none());
    }

    #[tokio::test]
    async fn swap_without_source_token_is_rejected() {
        let intent = intent_from(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": { "amount": "1" }
        }));
        let err = IntentProcessor::new().process(&intent).await.expect_err("must fail");
        assert!(matches!(err, AppError::Processing(_)));
    }

    #[tokio::test]
    async fn bridge_keeps_bridge_details() {
        let intent = intent_from(json!({
            "isTransactionIntent": true,
            "action": "bridge",
            "extractedParams": { "amount": "2", "chain": "starknet", "dest_chain": "base" }
        }));
        let processed = IntentProcessor::new().process(&intent).await.expect("processed");
        let bridge = processed.bridge.expect("bridge");
        assert_eq!(bridge.destination_network, "base");
        assert_eq!(processed.from_amount.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn withdraw_carries_protocol() {
        let intent = intent_from(json!({
            "isTransactionIntent": true,
            "action": "withdraw",
            "extractedParams": { "amount": "5", "protocol": "zklend" }
        }));
        let processed = IntentProcessor::new().process(&intent).await.expect("processed");
        assert_eq!(processed.protocol.as_deref(), Some("zklend"));
        assert!(processed.transactions.is_empty());
    }
}
