use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==================== ACTION ====================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Swap,
    Transfer,
    Bridge,
    Deposit,
    Withdraw,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Swap => "swap",
            Action::Transfer => "transfer",
            Action::Bridge => "bridge",
            Action::Deposit => "deposit",
            Action::Withdraw => "withdraw",
        }
    }

    /// Deposit and withdraw results always pay out to the requesting wallet.
    pub fn is_vault_action(&self) -> bool {
        matches!(self, Action::Deposit | Action::Withdraw)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "swap" => Ok(Action::Swap),
            "transfer" => Ok(Action::Transfer),
            "bridge" => Ok(Action::Bridge),
            "deposit" => Ok(Action::Deposit),
            "withdraw" => Ok(Action::Withdraw),
            other => Err(other.to_string()),
        }
    }
}

/// Only mutating intents are produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    Write,
}

// ==================== INTENT ====================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionIntent {
    pub solver: String,
    pub action: Action,
    #[serde(rename = "type")]
    pub kind: IntentKind,
    #[serde(rename = "extractedParams")]
    pub extracted_params: ExtractedParams,
    pub data: TransactionData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedParams {
    pub action: String,
    pub token1: String,
    pub token2: String,
    pub chain: String,
    pub amount: String,
    pub protocol: String,
    pub address: String,
    #[serde(rename = "dest_chain")]
    pub dest_chain: String,
    pub destination_chain: String,
    pub destination_address: String,
}

// ==================== PAYLOADS ====================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransactionData {
    SwapOrTransfer(SwapTransferData),
    Bridge(BridgeData),
    Vault(VaultData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransferData {
    pub description: String,
    pub steps: Vec<ContractCall>,
    pub from_token: TokenDescriptor,
    pub to_token: TokenDescriptor,
    pub from_amount: String,
    pub to_amount: String,
    pub receiver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_to_approve: Option<String>,
    #[serde(rename = "gasCostUSD", skip_serializing_if = "Option::is_none")]
    pub gas_cost_usd: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeData {
    pub description: String,
    pub steps: Vec<ContractCall>,
    pub bridge: BridgeDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeDetails {
    pub source_network: String,
    pub destination_network: String,
    pub source_token: String,
    pub destination_token: String,
    pub amount: f64,
    pub source_address: String,
    pub destination_address: String,
}

/// Payload for deposit and withdraw intents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultData {
    pub description: String,
    pub steps: Vec<ContractCall>,
    pub protocol: String,
    pub from_amount: String,
    pub to_amount: String,
    pub receiver: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCall {
    pub contract_address: String,
    pub entrypoint: String,
    pub calldata: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
}

// ==================== CONVERSATION ====================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

// ==================== PROCESSED ====================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTransaction {
    pub action: Action,
    pub description: String,
    pub transactions: Vec<ContractCall>,
    pub from_token: Option<TokenDescriptor>,
    pub to_token: Option<TokenDescriptor>,
    pub from_amount: Option<String>,
    pub to_amount: Option<String>,
    pub receiver: Option<String>,
    pub estimated_gas: Option<String>,
    pub solver: String,
    pub protocol: Option<String>,
    pub bridge: Option<BridgeDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parses_known_values_only() {
        assert_eq!("swap".parse::<Action>(), Ok(Action::Swap));
        assert_eq!("withdraw".parse::<Action>(), Ok(Action::Withdraw));
        assert_eq!(
            "unsupported_action".parse::<Action>(),
            Err("unsupported_action".to_string())
        );
        // Case-sensitive, same as the model contract
        assert!("Swap".parse::<Action>().is_err());
    }

    #[test]
    fn vault_actions_are_deposit_and_withdraw() {
        assert!(Action::Deposit.is_vault_action());
        assert!(Action::Withdraw.is_vault_action());
        assert!(!Action::Bridge.is_vault_action());
    }

    #[test]
    fn extracted_params_serialize_with_wire_names() {
        let params = ExtractedParams {
            dest_chain: "ethereum".to_string(),
            destination_chain: "ethereum".to_string(),
            destination_address: "0xabc".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["dest_chain"], "ethereum");
        assert_eq!(value["destinationChain"], "ethereum");
        assert_eq!(value["destinationAddress"], "0xabc");
    }

    #[test]
    fn swap_payload_omits_missing_optional_fields() {
        let data = SwapTransferData {
            description: String::new(),
            steps: vec![],
            from_token: TokenDescriptor {
                symbol: "ETH".to_string(),
                address: "0x1".to_string(),
                decimals: 1,
            },
            to_token: TokenDescriptor {
                symbol: "STRK".to_string(),
                address: "0x1".to_string(),
                decimals: 1,
            },
            from_amount: "1".to_string(),
            to_amount: "1".to_string(),
            receiver: "0x1".to_string(),
            amount_to_approve: None,
            gas_cost_usd: Some("0.5".to_string()),
        };
        let value = serde_json::to_value(&data).expect("serialize");
        assert!(value.get("amountToApprove").is_none());
        assert_eq!(value["gasCostUSD"], "0.5");
        assert_eq!(value["fromToken"]["decimals"], 1);
    }
}
