//! Application layer for pillpal
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    form_event::{FormEvent, Notice, NoticeKind},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, OutputSchema},
};
pub use use_cases::analyze_interactions::{
    AnalyzeError, AnalyzeInteractionsUseCase, INVALID_MEDICATION_MESSAGE,
};
pub use use_cases::form_controller::{FormController, SubmitAction, SubmitOutcome};
