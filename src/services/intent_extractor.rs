use crate::{
    constants::{ASSUMED_TOKEN_DECIMALS, DEFAULT_INTENT_SOLVER, PLACEHOLDER_TOKEN_DECIMALS},
    error::AppError,
    models::{
        Action, BridgeData, BridgeDetails, ChatMessage, ContractCall, ExtractedParams, IntentKind,
        SwapTransferData, TokenDescriptor, TransactionData, TransactionIntent, VaultData,
    },
    prompts::format_intent_request,
};
use num_bigint::{BigInt, BigUint};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

// Largest power of ten applied while scaling an amount to wei.
const MAX_AMOUNT_SHIFT: u32 = 1024;

/// Text-completion backend used to interpret prompts.
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync {
    async fn complete(&self, prompt: &str) -> crate::error::Result<String>;
}

/// Reasons an extraction attempt produced no intent. Only ever logged.
#[derive(Error, Debug)]
pub enum IntentError {
    #[error("generation service failed: {0}")]
    Generation(#[from] AppError),

    #[error("model output is not valid JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("model output is missing `{0}`")]
    MissingField(&'static str),

    #[error("amount `{0}` is not numeric")]
    InvalidAmount(String),

    #[error("amount `{0}` is out of range")]
    AmountOutOfRange(String),

    #[error("Unsupported action type: {0}")]
    UnsupportedAction(String),
}

/// Turns free-text prompts into normalized transaction intents.
#[derive(Clone)]
pub struct IntentExtractor {
    generator: Arc<dyn GenerationService>,
}

impl IntentExtractor {
    pub fn new(generator: Arc<dyn GenerationService>) -> Self {
        Self { generator }
    }

    /// Returns the recognized intent, or `None` when the prompt is not a
    /// transaction or anything along the way failed.
    pub async fn extract(
        &self,
        prompt: &str,
        address: &str,
        chain_id: &str,
        history: &[ChatMessage],
    ) -> Option<TransactionIntent> {
        match self.try_extract(prompt, address, chain_id, history).await {
            Ok(Some(intent)) => {
                tracing::debug!(
                    "Recognized {} intent (solver={})",
                    intent.action,
                    intent.solver
                );
                Some(intent)
            }
            Ok(None) => {
                tracing::debug!("Prompt is not a transaction intent");
                None
            }
            Err(e) => {
                tracing::warn!("Error fetching transaction intent: {}", e);
                None
            }
        }
    }

    async fn try_extract(
        &self,
        prompt: &str,
        address: &str,
        chain_id: &str,
        history: &[ChatMessage],
    ) -> Result<Option<TransactionIntent>, IntentError> {
        let conversation_history = flatten_history(history);
        let request = format_intent_request(prompt, chain_id, &conversation_history);
        let raw = self.generator.complete(&request).await?;
        parse_model_output(&raw, address)
    }
}

/// One `role: content` line per message.
pub fn flatten_history(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validates raw model output into a [`TransactionIntent`].
///
/// `Ok(None)` means the model reported no transaction intent.
pub fn parse_model_output(
    raw: &str,
    address: &str,
) -> Result<Option<TransactionIntent>, IntentError> {
    let root: Value = serde_json::from_str(raw)?;

    if !root.get("isTransactionIntent").map(is_truthy).unwrap_or(false) {
        return Ok(None);
    }

    let params = root
        .get("extractedParams")
        .filter(|value| value.is_object())
        .ok_or(IntentError::MissingField("extractedParams"))?;
    let extracted_params = normalize_params(params, address);

    let wei_amount = to_wei(&extracted_params.amount)?.to_string();

    let action = match root.get("action") {
        Some(Value::String(raw_action)) => Action::from_str(raw_action)
            .map_err(IntentError::UnsupportedAction)?,
        Some(other) => return Err(IntentError::UnsupportedAction(other.to_string())),
        None => return Err(IntentError::UnsupportedAction("undefined".to_string())),
    };

    let model_data = root.get("data").unwrap_or(&Value::Null);
    let data = match action {
        Action::Swap | Action::Transfer => TransactionData::SwapOrTransfer(build_swap_transfer(
            params,
            model_data,
            &extracted_params,
            address,
            &wei_amount,
        )),
        Action::Bridge => TransactionData::Bridge(build_bridge(&extracted_params, address)),
        Action::Deposit | Action::Withdraw => TransactionData::Vault(build_vault(&extracted_params)),
    };

    Ok(Some(TransactionIntent {
        solver: text_field(&root, "solver").unwrap_or_else(|| DEFAULT_INTENT_SOLVER.to_string()),
        action,
        kind: IntentKind::Write,
        extracted_params,
        data,
    }))
}

// Internal helper that applies the defaulting rules to `extractedParams`.
fn normalize_params(params: &Value, address: &str) -> ExtractedParams {
    let field = |key: &str| text_field(params, key).unwrap_or_default();
    let dest_chain = text_field(params, "dest_chain")
        .or_else(|| text_field(params, "destinationChain"))
        .unwrap_or_default();

    ExtractedParams {
        action: field("action"),
        token1: field("token1"),
        token2: field("token2"),
        chain: field("chain"),
        amount: field("amount"),
        protocol: field("protocol"),
        address: text_field(params, "address").unwrap_or_else(|| address.to_string()),
        destination_chain: dest_chain.clone(),
        dest_chain,
        destination_address: text_field(params, "destinationAddress")
            .unwrap_or_else(|| address.to_string()),
    }
}

fn build_swap_transfer(
    params: &Value,
    model_data: &Value,
    extracted: &ExtractedParams,
    address: &str,
    wei_amount: &str,
) -> SwapTransferData {
    let steps = match supplied_transaction(params) {
        Some((contract_address, entrypoint)) => {
            let recipient = text_field(params, "destinationAddress")
                .or_else(|| text_field(params, "address"))
                .unwrap_or_else(|| address.to_string());
            vec![ContractCall {
                contract_address,
                entrypoint,
                calldata: vec![recipient, wei_amount.to_string(), "0".to_string()],
            }]
        }
        None => Vec::new(),
    };

    SwapTransferData {
        description: text_field(model_data, "description").unwrap_or_default(),
        steps,
        from_token: placeholder_token(&extracted.token1, &extracted.address),
        to_token: placeholder_token(&extracted.token2, &extracted.address),
        from_amount: extracted.amount.clone(),
        to_amount: extracted.amount.clone(),
        receiver: extracted.address.clone(),
        amount_to_approve: text_field(model_data, "amountToApprove"),
        gas_cost_usd: text_field(model_data, "gasCostUSD"),
    }
}

fn build_bridge(extracted: &ExtractedParams, address: &str) -> BridgeData {
    BridgeData {
        description: String::new(),
        steps: Vec::new(),
        bridge: BridgeDetails {
            source_network: extracted.chain.clone(),
            destination_network: extracted.dest_chain.clone(),
            source_token: extracted.token1.clone(),
            destination_token: extracted.token2.clone(),
            amount: extracted.amount.trim().parse::<f64>().unwrap_or(0.0),
            source_address: address.to_string(),
            destination_address: extracted.destination_address.clone(),
        },
    }
}

fn build_vault(extracted: &ExtractedParams) -> VaultData {
    VaultData {
        description: String::new(),
        steps: Vec::new(),
        protocol: extracted.protocol.clone(),
        from_amount: extracted.amount.clone(),
        to_amount: extracted.amount.clone(),
        receiver: extracted.address.clone(),
    }
}

fn placeholder_token(symbol: &str, address: &str) -> TokenDescriptor {
    TokenDescriptor {
        symbol: symbol.to_string(),
        address: address.to_string(),
        decimals: PLACEHOLDER_TOKEN_DECIMALS,
    }
}

// A step is only built when contract, entrypoint and calldata are all present.
// The model's calldata itself is discarded.
fn supplied_transaction(params: &Value) -> Option<(String, String)> {
    let transaction = params.get("transaction")?;
    let contract_address = text_field(transaction, "contractAddress")?;
    let entrypoint = text_field(transaction, "entrypoint")?;
    if !transaction.get("calldata").map(is_truthy).unwrap_or(false) {
        return None;
    }
    Some((contract_address, entrypoint))
}

/// `floor(amount * 10^18)` as an arbitrary-precision integer.
///
/// Accepts plain decimals and scientific notation. An empty amount is zero.
fn to_wei(raw: &str) -> Result<BigInt, IntentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(BigInt::from(0u8));
    }
    let invalid = || IntentError::InvalidAmount(raw.to_string());
    let out_of_range = || IntentError::AmountOutOfRange(raw.to_string());

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(index) => {
            let exponent = unsigned[index + 1..].parse::<i64>().map_err(|_| invalid())?;
            (&unsigned[..index], exponent)
        }
        None => (unsigned, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{whole}{fraction}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;

    let shift = i64::try_from(fraction.len())
        .ok()
        .and_then(|len| exponent.checked_sub(len))
        .and_then(|shift| shift.checked_add(i64::from(ASSUMED_TOKEN_DECIMALS)))
        .ok_or_else(out_of_range)?;

    let ten = BigUint::from(10u8);
    let (scaled, exact) = if shift >= 0 {
        let shift = u32::try_from(shift)
            .ok()
            .filter(|shift| *shift <= MAX_AMOUNT_SHIFT)
            .ok_or_else(out_of_range)?;
        (magnitude * ten.pow(shift), true)
    } else if shift.unsigned_abs() > digits.len() as u64 {
        // Smaller than one wei.
        (BigUint::from(0u8), magnitude.bits() == 0)
    } else {
        let divisor = ten.pow(shift.unsigned_abs() as u32);
        let exact = (&magnitude % &divisor).bits() == 0;
        (magnitude / divisor, exact)
    };

    let wei = BigInt::from(scaled);
    Ok(match (negative, exact) {
        (false, _) => wei,
        (true, true) => -wei,
        (true, false) => -wei - BigInt::from(1u8),
    })
}

// Mirrors the model contract: null, false, 0 and "" count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_field(source: &Value, key: &str) -> Option<String> {
    let value = source.get(key).filter(|value| is_truthy(value))?;
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    const WALLET: &str = "0x0123abc";

    struct FakeGenerator {
        reply: std::result::Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(body: impl Into<String>) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(body.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl GenerationService for FakeGenerator {
        async fn complete(&self, prompt: &str) -> crate::error::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(AppError::ExternalAPI)
        }
    }

    async fn extract_with(body: Value) -> Option<TransactionIntent> {
        IntentExtractor::new(FakeGenerator::replying(body.to_string()))
            .extract("do it", WALLET, "4012", &[])
            .await
    }

    fn swap_data(intent: &TransactionIntent) -> &SwapTransferData {
        match &intent.data {
            TransactionData::SwapOrTransfer(data) => data,
            other => panic!("expected swap payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_intent_returns_none() {
        let result = extract_with(json!({ "isTransactionIntent": false })).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn missing_flag_counts_as_non_intent() {
        let result = extract_with(json!({ "action": "swap", "extractedParams": {} })).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn invalid_json_returns_none() {
        let extractor = IntentExtractor::new(FakeGenerator::replying("Sure! Here is the JSON:"));
        assert!(extractor.extract("swap", WALLET, "4012", &[]).await.is_none());
    }

    #[tokio::test]
    async fn generation_failure_returns_none() {
        // Error jaringan diperlakukan sama seperti bukan intent
        let extractor = IntentExtractor::new(FakeGenerator::failing("rate limited"));
        assert!(extractor.extract("swap", WALLET, "4012", &[]).await.is_none());
    }

    #[tokio::test]
    async fn unsupported_action_returns_none() {
        let result = extract_with(json!({
            "isTransactionIntent": true,
            "action": "unsupported_action",
            "extractedParams": { "amount": "1" }
        }))
        .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn missing_extracted_params_returns_none() {
        let result = extract_with(json!({ "isTransactionIntent": true, "action": "swap" })).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn non_numeric_amount_returns_none() {
        let result = extract_with(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": { "amount": "a lot" }
        }))
        .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn swap_without_transaction_fields_has_no_steps() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": { "action": "swap", "token1": "ETH", "token2": "STRK", "amount": "2.5" }
        }))
        .await
        .expect("swap intent");

        let data = swap_data(&intent);
        assert!(data.steps.is_empty());
        assert_eq!(data.from_amount, "2.5");
        assert_eq!(data.to_amount, "2.5");
        assert_eq!(data.from_token.symbol, "ETH");
        assert_eq!(data.to_token.symbol, "STRK");
        assert_eq!(data.from_token.decimals, PLACEHOLDER_TOKEN_DECIMALS);
        assert_eq!(data.receiver, WALLET);
        assert_eq!(intent.solver, DEFAULT_INTENT_SOLVER);
        assert_eq!(intent.kind, IntentKind::Write);
    }

    #[tokio::test]
    async fn swap_with_transaction_builds_single_step() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": {
                "amount": "1",
                "transaction": {
                    "contractAddress": "0xC",
                    "entrypoint": "transfer",
                    "calldata": ["0xdead", "42"]
                }
            }
        }))
        .await
        .expect("swap intent");

        let steps = &swap_data(&intent).steps;
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].contract_address, "0xC");
        assert_eq!(steps[0].entrypoint, "transfer");
        assert_eq!(
            steps[0].calldata,
            vec![WALLET.to_string(), "1000000000000000000".to_string(), "0".to_string()]
        );
    }

    #[tokio::test]
    async fn transfer_calldata_prefers_destination_address() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "transfer",
            "extractedParams": {
                "amount": 0.5,
                "token1": "STRK",
                "destinationAddress": "0xfriend",
                "transaction": { "contractAddress": "0xS", "entrypoint": "transfer", "calldata": [] }
            },
            "data": { "description": "Send STRK", "gasCostUSD": 0.02 }
        }))
        .await
        .expect("transfer intent");

        let data = swap_data(&intent);
        assert_eq!(data.steps[0].calldata[0], "0xfriend");
        assert_eq!(data.steps[0].calldata[1], "500000000000000000");
        assert_eq!(data.description, "Send STRK");
        assert_eq!(data.gas_cost_usd.as_deref(), Some("0.02"));
        assert_eq!(data.from_amount, "0.5");
        assert_eq!(intent.extracted_params.destination_address, "0xfriend");
    }

    #[tokio::test]
    async fn partial_transaction_fields_build_no_step() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": {
                "amount": "1",
                "transaction": { "contractAddress": "0xC", "entrypoint": "transfer" }
            }
        }))
        .await
        .expect("swap intent");
        assert!(swap_data(&intent).steps.is_empty());
    }

    #[tokio::test]
    async fn deposit_defaults_address_to_caller() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "deposit",
            "extractedParams": { "protocol": "nostra", "amount": "10", "token1": "USDC" }
        }))
        .await
        .expect("deposit intent");

        assert_eq!(intent.extracted_params.address, WALLET);
        assert_eq!(intent.extracted_params.destination_address, WALLET);
        match &intent.data {
            TransactionData::Vault(data) => {
                assert_eq!(data.protocol, "nostra");
                assert_eq!(data.from_amount, "10");
                assert_eq!(data.to_amount, "10");
                assert_eq!(data.receiver, WALLET);
                assert!(data.steps.is_empty());
                assert!(data.description.is_empty());
            }
            other => panic!("expected vault payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bridge_without_amount_defaults_to_zero() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "bridge",
            "extractedParams": {
                "token1": "ETH",
                "token2": "ETH",
                "chain": "starknet",
                "dest_chain": "base",
                "address": "0xmodel"
            }
        }))
        .await
        .expect("bridge intent");

        match &intent.data {
            TransactionData::Bridge(data) => {
                assert_eq!(data.bridge.amount, 0.0);
                assert_eq!(data.bridge.source_network, "starknet");
                assert_eq!(data.bridge.destination_network, "base");
                // Source is always the requesting wallet
                assert_eq!(data.bridge.source_address, WALLET);
                assert_eq!(data.bridge.destination_address, WALLET);
            }
            other => panic!("expected bridge payload, got {:?}", other),
        }
        assert_eq!(intent.extracted_params.destination_chain, "base");
        assert_eq!(intent.extracted_params.address, "0xmodel");
    }

    #[tokio::test]
    async fn bridge_amount_is_parsed_as_float() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "bridge",
            "extractedParams": { "amount": "0.25" }
        }))
        .await
        .expect("bridge intent");
        match &intent.data {
            TransactionData::Bridge(data) => assert_eq!(data.bridge.amount, 0.25),
            other => panic!("expected bridge payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn extraction_is_deterministic() {
        let body = json!({
            "isTransactionIntent": true,
            "solver": "custom",
            "action": "swap",
            "extractedParams": {
                "token1": "ETH",
                "token2": "USDC",
                "amount": "3",
                "transaction": { "contractAddress": "0xC", "entrypoint": "swap", "calldata": ["1"] }
            }
        });
        let extractor = IntentExtractor::new(FakeGenerator::replying(body.to_string()));
        let first = extractor.extract("swap", WALLET, "4012", &[]).await.expect("first");
        let second = extractor.extract("swap", WALLET, "4012", &[]).await.expect("second");

        assert_eq!(first.solver, "custom");
        assert_eq!(
            serde_json::to_vec(&first).expect("serialize"),
            serde_json::to_vec(&second).expect("serialize")
        );
    }

    #[tokio::test]
    async fn request_includes_history_and_chain() {
        let generator = FakeGenerator::replying(json!({ "isTransactionIntent": false }).to_string());
        let extractor = IntentExtractor::new(generator.clone());
        let history = vec![
            ChatMessage { role: "user".to_string(), content: "hi".to_string() },
            ChatMessage { role: "assistant".to_string(), content: "hello".to_string() },
        ];
        extractor.extract("swap 1 ETH", WALLET, "SN_MAIN", &history).await;

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("user: hi\nassistant: hello"));
        assert!(prompts[0].contains("SN_MAIN"));
        assert!(prompts[0].contains("swap 1 ETH"));
    }

    #[test]
    fn flatten_history_handles_empty() {
        assert_eq!(flatten_history(&[]), "");
    }

    fn wei(raw: &str) -> String {
        to_wei(raw).expect("numeric amount").to_string()
    }

    #[test]
    fn wei_conversion_floors_fraction() {
        assert_eq!(wei("0.0000000000000000015"), "1");
        assert_eq!(wei("2.5"), "2500000000000000000");
        assert_eq!(wei(""), "0");
        assert_eq!(wei("1e2"), "100000000000000000000");
        assert_eq!(wei("15E-19"), "1");
        assert_eq!(wei(".5"), "500000000000000000");
        assert_eq!(wei("1e-40"), "0");
    }

    #[test]
    fn wei_conversion_floors_negative_towards_minus_infinity() {
        assert_eq!(wei("-1"), "-1000000000000000000");
        assert_eq!(wei("-0.0000000000000000015"), "-2");
    }

    #[test]
    fn wei_conversion_is_exact_for_large_amounts() {
        // Nilai di atas batas tipe desimal 96-bit tetap dihitung tepat
        assert_eq!(wei("100000000000"), "100000000000000000000000000000");
        assert_eq!(
            wei("123456789012345678901234567890.123456789012345678999"),
            "123456789012345678901234567890123456789012345678"
        );
    }

    #[test]
    fn wei_conversion_rejects_garbage_and_huge_exponents() {
        assert!(matches!(to_wei("a lot"), Err(IntentError::InvalidAmount(_))));
        assert!(matches!(to_wei("."), Err(IntentError::InvalidAmount(_))));
        assert!(matches!(to_wei("1e"), Err(IntentError::InvalidAmount(_))));
        assert!(matches!(to_wei("1,5"), Err(IntentError::InvalidAmount(_))));
        assert!(matches!(
            to_wei("1e100000"),
            Err(IntentError::AmountOutOfRange(_))
        ));
    }

    #[tokio::test]
    async fn large_swap_amount_scales_exactly() {
        let intent = extract_with(json!({
            "isTransactionIntent": true,
            "action": "swap",
            "extractedParams": {
                "amount": "100000000000",
                "transaction": { "contractAddress": "0xC", "entrypoint": "transfer", "calldata": ["x"] }
            }
        }))
        .await
        .expect("swap intent");

        let data = swap_data(&intent);
        assert_eq!(data.steps[0].calldata[1], "100000000000000000000000000000");
        assert_eq!(data.from_amount, "100000000000");
    }

    #[tokio::test]
    async fn large_bridge_and_deposit_amounts_are_accepted() {
        let bridge = extract_with(json!({
            "isTransactionIntent": true,
            "action": "bridge",
            "extractedParams": { "amount": "100000000000", "token1": "ETH" }
        }))
        .await
        .expect("bridge intent");
        match &bridge.data {
            TransactionData::Bridge(data) => assert_eq!(data.bridge.amount, 1e11),
            other => panic!("expected bridge payload, got {:?}", other),
        }

        let deposit = extract_with(json!({
            "isTransactionIntent": true,
            "action": "deposit",
            "extractedParams": { "amount": "80000000000", "protocol": "nostra" }
        }))
        .await;
        assert!(deposit.is_some());
    }

    #[test]
    fn truthiness_matches_model_contract() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("0")));
    }
}
