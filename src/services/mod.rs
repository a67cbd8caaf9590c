// All service modules
pub mod intent_extractor;
pub mod knowledge_base;
pub mod transaction_processor;

// Re-export for convenience
pub use intent_extractor::{GenerationService, IntentExtractor};
pub use knowledge_base::{BrianKnowledgeBase, KnowledgeBase};
pub use transaction_processor::{IntentProcessor, TransactionProcessor};
