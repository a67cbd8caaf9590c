// src/api/mod.rs
pub mod health;
pub mod transactions;

use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;
use crate::services::{IntentExtractor, KnowledgeBase, TransactionProcessor};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub extractor: IntentExtractor,
    pub knowledge: Arc<dyn KnowledgeBase>,
    pub processor: Arc<dyn TransactionProcessor>,
}
