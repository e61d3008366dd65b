//! Canned narrative composer for tests.

use std::sync::Mutex;

use super::{NarrativeComposer, NarrativeError};

/// Answers every prompt with a fixed text, or fails when unavailable.
pub struct MockComposer {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockComposer {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl NarrativeComposer for MockComposer {
    async fn compose(&self, prompt: &str) -> Result<String, NarrativeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| NarrativeError::Unavailable("mock is offline".to_string()))
    }
}
