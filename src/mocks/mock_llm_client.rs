use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::agent::LlmClientTrait;
use crate::types::{FunctionCall, Message, ToolCall};

/// Scripted stand-in for the real client: responses are popped in order,
/// every request is recorded for later inspection.
#[derive(Clone)]
pub struct MockLlmClient {
    responses: Arc<Mutex<Vec<Message>>>,
    call_history: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn add_text_response(&mut self, content: &str) {
        let response = Message {
            role: "assistant".to_string(),
            content: Some(content.to_string()),
            tool_calls: None,
            tool_call_id: None,
        };
        self.responses.lock().unwrap().push(response);
    }

    pub fn add_tool_call_response(&mut self, tool_name: &str, args: &str) {
        self.add_tool_call_response_with_id("test-call-123", tool_name, args);
    }

    pub fn add_tool_call_response_with_id(&mut self, id: &str, tool_name: &str, args: &str) {
        let tool_call = ToolCall {
            id: id.to_string(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: tool_name.to_string(),
                arguments: args.to_string(),
            },
        };

        let response = Message {
            role: "assistant".to_string(),
            content: None,
            tool_calls: Some(vec![tool_call]),
            tool_call_id: None,
        };
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_call_history(&self) -> Vec<Vec<Message>> {
        self.call_history.lock().unwrap().clone()
    }

    fn pop_response(&self) -> Message {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Message {
                role: "assistant".to_string(),
                content: Some("No more mock responses configured".to_string()),
                tool_calls: None,
                tool_call_id: None,
            }
        } else {
            responses.remove(0)
        }
    }
}

#[async_trait]
impl LlmClientTrait for MockLlmClient {
    async fn chat_once(&self, messages: &[Message], _tools: &Value) -> Result<Message> {
        self.call_history.lock().unwrap().push(messages.to_vec());
        Ok(self.pop_response())
    }
}
