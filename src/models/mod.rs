// src/models/mod.rs
pub mod chat;
pub mod intent;

pub use chat::{Chat, Message, StoredTransaction, User};
pub use intent::{
    Action, BridgeData, BridgeDetails, ChatMessage, ContractCall, ExtractedParams, IntentKind,
    ProcessedTransaction, SwapTransferData, TokenDescriptor, TransactionData, TransactionIntent,
    VaultData,
};
