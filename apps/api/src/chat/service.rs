//! Chat service — classifies a message, answers greetings and rejections
//! locally, and forwards career questions to the completion provider.
//!
//! No state survives between messages except the greeting RNG.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};

use crate::chat::classifier::{classify, Classification, QueryType};
use crate::chat::greetings::pick_greeting;
use crate::chat::prompts::build_chat_prompt;
use crate::chat::shaping::{shape_reply, StructuredReply};
use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, LlmError};

pub const UNSUPPORTED_MESSAGE: &str = "I'm EdVise, your career and education assistant. \
    I can only help with questions about careers, exams, colleges, scholarships and courses. \
    Please ask me something related to your studies or career path.";

/// Settings the chat component needs; built from `Config::chat_config`.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

/// Body returned for a handled message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChatReply {
    Success {
        #[serde(rename = "queryType")]
        query_type: QueryType,
        response: StructuredReply,
    },
    /// Out-of-scope message. A policy rejection, not a failure.
    #[serde(rename = "error")]
    Rejected {
        #[serde(rename = "queryType")]
        query_type: QueryType,
        message: String,
    },
}

impl ChatReply {
    pub fn query_type(&self) -> QueryType {
        match self {
            ChatReply::Success { query_type, .. } | ChatReply::Rejected { query_type, .. } => {
                *query_type
            }
        }
    }
}

pub struct ChatService {
    config: ChatConfig,
    provider: Arc<dyn CompletionProvider>,
    rng: Mutex<StdRng>,
}

impl ChatService {
    pub fn new(config: ChatConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self::with_rng(config, provider, StdRng::from_entropy())
    }

    pub fn with_rng(config: ChatConfig, provider: Arc<dyn CompletionProvider>, rng: StdRng) -> Self {
        Self {
            config,
            provider,
            rng: Mutex::new(rng),
        }
    }

    pub async fn respond(&self, message: &str) -> Result<ChatReply, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::InputMissing("message is required".to_string()));
        }

        let topic = match classify(message) {
            Classification::Greeting => return Ok(self.greeting()),
            Classification::OutOfScope => {
                info!("Rejected out-of-scope chat message");
                return Ok(ChatReply::Rejected {
                    query_type: QueryType::Unsupported,
                    message: UNSUPPORTED_MESSAGE.to_string(),
                });
            }
            Classification::CareerRelated(topic) => topic,
        };

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::MisconfiguredService("GEMINI_API_KEY is not set".to_string()))?;

        let prompt = build_chat_prompt(topic, message);
        let query_type = topic.query_type();
        info!(?query_type, model = %self.config.model, "Forwarding chat message upstream");

        let raw = tokio::time::timeout(
            self.config.timeout,
            self.provider.complete(&prompt, &self.config.model, api_key),
        )
        .await
        .map_err(|_| AppError::UpstreamTimeout)?
        .map_err(map_llm_error)?;

        if raw.trim().is_empty() {
            return Err(AppError::EmptyUpstreamReply);
        }

        Ok(ChatReply::Success {
            query_type,
            response: shape_reply(&raw),
        })
    }

    fn greeting(&self) -> ChatReply {
        let variant = match self.rng.lock() {
            Ok(mut rng) => pick_greeting(&mut *rng),
            Err(poisoned) => pick_greeting(&mut *poisoned.into_inner()),
        };
        ChatReply::Success {
            query_type: QueryType::Greeting,
            response: variant.to_reply(),
        }
    }
}

fn map_llm_error(e: LlmError) -> AppError {
    match e {
        LlmError::Timeout => AppError::UpstreamTimeout,
        LlmError::EmptyContent => AppError::EmptyUpstreamReply,
        LlmError::Api { status, message } => {
            warn!("Gemini returned {status}");
            AppError::UpstreamError(format!("Upstream returned {status}: {message}"))
        }
        LlmError::Http(e) => AppError::UpstreamError(format!("Upstream request failed: {e}")),
        LlmError::Parse(e) => AppError::UpstreamError(format!("Unreadable upstream reply: {e}")),
    }
}
