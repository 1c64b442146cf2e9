//! Test doubles shared by the use case tests.

use crate::config::AnalysisConfig;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, OutputSchema};
use crate::use_cases::analyze_interactions::AnalyzeInteractionsUseCase;
use async_trait::async_trait;
use pillpal_domain::{AnalysisRequest, Medication, Model};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ==================== Scripted replies ====================

#[derive(Clone)]
pub struct ScriptedReply {
    result: Result<String, GatewayError>,
    delay: Option<Duration>,
}

impl ScriptedReply {
    pub fn text(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            delay: None,
        }
    }

    pub fn fail(error: GatewayError) -> Self {
        Self {
            result: Err(error),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Default)]
struct Calls {
    sessions: AtomicUsize,
    sends: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    system_prompts: Mutex<Vec<String>>,
    schema_names: Mutex<Vec<String>>,
}

// ==================== Mock Gateway ====================

pub struct MockGateway {
    reply: ScriptedReply,
    session_error: Option<GatewayError>,
    calls: Arc<Calls>,
}

impl MockGateway {
    /// Every session answers every message with `reply`.
    pub fn always(reply: ScriptedReply) -> Self {
        Self {
            reply,
            session_error: None,
            calls: Arc::new(Calls::default()),
        }
    }

    /// Session creation itself fails.
    pub fn failing_sessions(error: GatewayError) -> Self {
        Self {
            reply: ScriptedReply::text(""),
            session_error: Some(error),
            calls: Arc::new(Calls::default()),
        }
    }

    pub fn session_count(&self) -> usize {
        self.calls.sessions.load(Ordering::SeqCst)
    }

    pub fn send_count(&self) -> usize {
        self.calls.sends.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.prompts.lock().unwrap().clone()
    }

    pub fn system_prompts(&self) -> Vec<String> {
        self.calls.system_prompts.lock().unwrap().clone()
    }

    pub fn schema_names(&self) -> Vec<String> {
        self.calls.schema_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.create_session_with_system_prompt(model, "").await
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.calls.sessions.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.session_error {
            return Err(e.clone());
        }
        self.calls
            .system_prompts
            .lock()
            .unwrap()
            .push(system_prompt.to_string());
        Ok(Box::new(MockSession {
            model: model.clone(),
            reply: self.reply.clone(),
            calls: self.calls.clone(),
        }))
    }
}

struct MockSession {
    model: Model,
    reply: ScriptedReply,
    calls: Arc<Calls>,
}

#[async_trait]
impl LlmSession for MockSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.calls.sends.fetch_add(1, Ordering::SeqCst);
        self.calls.prompts.lock().unwrap().push(content.to_string());
        if let Some(delay) = self.reply.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.result.clone()
    }

    async fn send_structured(
        &self,
        content: &str,
        schema: &OutputSchema,
    ) -> Result<String, GatewayError> {
        self.calls
            .schema_names
            .lock()
            .unwrap()
            .push(schema.name.clone());
        self.send(content).await
    }
}

// ==================== Recording logger ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event_type: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .count()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

// ==================== Helpers ====================

pub fn service(gateway: Arc<MockGateway>) -> AnalyzeInteractionsUseCase {
    AnalyzeInteractionsUseCase::new(gateway, &AnalysisConfig::default())
}

pub fn aspirin_request() -> AnalysisRequest {
    AnalysisRequest::new(vec![Medication::try_new("Aspirin", "81mg").unwrap()])
}
