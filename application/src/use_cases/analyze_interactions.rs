//! Analyze Interactions use case.
//!
//! Validates an [`AnalysisRequest`], renders the interaction prompt,
//! delegates to the configured model and maps the outcome to an
//! [`AnalysisResult`].
//!
//! Faults never cross this boundary: every path of
//! [`AnalyzeInteractionsUseCase::analyze`] returns a well-formed result.
//! The underlying cause of a model fault is logged for operators and
//! collapsed into a single user-facing message.

use crate::config::AnalysisConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, OutputSchema};
use pillpal_domain::util::truncate_str;
use pillpal_domain::{
    AnalysisRequest, AnalysisResult, InteractionSummary, Model, PromptTemplate, SummaryParseError,
    parse_summary_response,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Returned when a request contains an entry with a blank name or dosage.
pub const INVALID_MEDICATION_MESSAGE: &str = "Each medication must have a name and a dosage.";

/// Name of the output schema sent to providers with structured output.
const OUTPUT_SCHEMA_NAME: &str = "interaction_summary";

/// Faults that can occur while obtaining a summary from the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Malformed model output: {0}")]
    Parse(#[from] SummaryParseError),
}

impl AnalyzeError {
    /// Short machine-readable kind, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Gateway(e) => e.kind(),
            AnalyzeError::Parse(SummaryParseError::NullSummary) => "null_summary",
            AnalyzeError::Parse(SummaryParseError::MissingSummary) => "missing_summary",
            AnalyzeError::Parse(_) => "malformed_output",
        }
    }
}

/// Interaction analysis service.
///
/// Holds no per-call state: identical requests against a deterministic
/// model produce identical results.
pub struct AnalyzeInteractionsUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    request_timeout: Option<Duration>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeInteractionsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: &AnalysisConfig) -> Self {
        Self {
            gateway,
            model: config.model.clone(),
            request_timeout: config.request_timeout,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Analyze the request, returning a summary or a user-facing error.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        if request.is_empty() {
            debug!("Rejecting analysis request without medications");
            return AnalysisResult::no_medications();
        }
        if !request.is_well_formed() {
            debug!("Rejecting analysis request with a blank name or dosage");
            return AnalysisResult::failure(INVALID_MEDICATION_MESSAGE);
        }

        info!(
            "Analyzing {} medications with {}",
            request.len(),
            self.model
        );

        match self.try_analyze(request).await {
            Ok(output) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "analysis_completed",
                    serde_json::json!({
                        "model": self.model.to_string(),
                        "medications": request.medications,
                        "bytes": output.summary.len(),
                        "summary": output.summary,
                    }),
                ));
                AnalysisResult::success(output.summary)
            }
            Err(e) => {
                error!(kind = e.kind(), "Error analyzing drug interactions: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "analysis_failed",
                    serde_json::json!({
                        "model": self.model.to_string(),
                        "medications": request.medications,
                        "kind": e.kind(),
                        "error": e.to_string(),
                    }),
                ));
                AnalysisResult::unexpected_error()
            }
        }
    }

    /// Run the model call and validate its output, surfacing the exact fault.
    ///
    /// Does not check the request for emptiness; use [`Self::analyze`] for
    /// the full contract.
    pub async fn try_analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<InteractionSummary, AnalyzeError> {
        let call = async {
            let session = self
                .gateway
                .create_session_with_system_prompt(&self.model, PromptTemplate::analysis_system())
                .await?;

            let prompt = PromptTemplate::analysis_prompt(request);
            let schema = OutputSchema::new(OUTPUT_SCHEMA_NAME, InteractionSummary::json_schema());
            let raw = session.send_structured(&prompt, &schema).await?;

            debug!("Model response: {}", truncate_str(&raw, 200));
            Ok::<String, GatewayError>(raw)
        };

        let raw = match self.request_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result?,
                Err(_) => {
                    warn!("Model call exceeded {:?}", limit);
                    return Err(GatewayError::Timeout.into());
                }
            },
            None => call.await?,
        };

        Ok(parse_summary_response(&raw)?)
    }
}
