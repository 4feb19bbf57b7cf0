use async_trait::async_trait;
use serde_json::Value;
use tokio::time::{Duration, timeout};

use crate::artist::Artist;
use crate::llm_client::LlmClient;
use crate::tool_registry::ToolRegistry;
use crate::tools::{self, ToolContext, ToolKind};
use crate::types::Message;
use crate::utils::clip;

#[async_trait]
pub trait LlmClientTrait: Send + Sync {
    async fn chat_once(&self, messages: &[Message], tools: &Value) -> anyhow::Result<Message>;
}

#[async_trait]
impl LlmClientTrait for LlmClient {
    async fn chat_once(&self, messages: &[Message], tools: &Value) -> anyhow::Result<Message> {
        self.chat_once(messages, tools).await
    }
}

#[derive(Clone)]
pub struct AgentOptions {
    pub system_prompt: String,
    pub max_tool_rounds: usize, // dispatch rounds per turn before failing closed
    pub step_timeout: Duration,
    pub observation_clip: usize, // chars per tool output
}

/// What one completed turn hands back to the caller. The caller owns
/// history persistence; the agent only reads it.
#[derive(Debug)]
pub struct ChatTurn {
    pub reply: String,
    pub booked_city: Option<String>,
    pub image: Option<Vec<u8>>, // PNG bytes, present only after a confirmed booking
}

pub struct Agent {
    llm: Box<dyn LlmClientTrait>,
    tools: ToolRegistry,
    ctx: ToolContext,
    artist: Option<Box<dyn Artist>>,
    opts: AgentOptions,
}

impl Agent {
    pub fn new(
        llm: Box<dyn LlmClientTrait>,
        tools: ToolRegistry,
        ctx: ToolContext,
        artist: Option<Box<dyn Artist>>,
        opts: AgentOptions,
    ) -> Self {
        Self {
            llm,
            tools,
            ctx,
            artist,
            opts,
        }
    }

    pub fn max_tool_rounds(&self) -> usize {
        self.opts.max_tool_rounds
    }

    // System prompt first, then the caller's history verbatim, then the
    // new user message. No reordering, no deduplication.
    pub fn assemble_messages(&self, history: &[Message], user_input: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message {
            role: "system".to_string(),
            content: Some(self.opts.system_prompt.clone()),
            tool_calls: None,
            tool_call_id: None,
        });
        messages.extend_from_slice(history);
        messages.push(Message {
            role: "user".to_string(),
            content: Some(user_input.to_string()),
            tool_calls: None,
            tool_call_id: None,
        });
        messages
    }

    async fn invoke(&self, messages: &[Message]) -> anyhow::Result<Message> {
        timeout(
            self.opts.step_timeout,
            self.llm.chat_once(messages, self.tools.schemas()),
        )
        .await?
    }

    /// One full turn: invoke the model, dispatch any requested tools,
    /// re-invoke with the results, until the model answers in plain text.
    /// Tool rounds are bounded; exceeding the bound ends the turn with an
    /// error and no assistant reply.
    pub async fn chat(&self, history: &[Message], user_input: &str) -> anyhow::Result<ChatTurn> {
        let mut messages = self.assemble_messages(history, user_input);
        let mut booked_city: Option<String> = None;
        let mut rounds = 0usize;

        let reply = loop {
            let step = self.invoke(&messages).await?;
            // The raw assistant message goes into the conversation before
            // dispatch; the provider needs it as context for the follow-up.
            messages.push(step.clone());

            let tool_calls = step.tool_calls.clone().unwrap_or_default();
            if tool_calls.is_empty() {
                break step
                    .content
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default();
            }

            if rounds >= self.opts.max_tool_rounds {
                return Err(anyhow::anyhow!(
                    "Tool round limit reached ({} rounds) without a final answer",
                    self.opts.max_tool_rounds
                ));
            }
            rounds += 1;

            for tc in &tool_calls {
                println!("\u{001b}[35m▌🔧 {}\u{001b}[0m", tc.function.name);

                let result = tools::dispatch_call(&self.ctx, tc);
                if result.is_success() && tc.function.name == ToolKind::BookTicket.name() {
                    if let Some(city) = result.payload["city"].as_str() {
                        booked_city = Some(city.to_string());
                    }
                }
                messages.push(Message {
                    role: "tool".to_string(),
                    content: Some(clip(&result.content(), self.opts.observation_clip)),
                    tool_calls: None,
                    tool_call_id: Some(tc.id.clone()),
                });
            }
        };

        let mut image = None;
        if let (Some(city), Some(artist)) = (&booked_city, &self.artist) {
            image = Some(artist.render_city(city).await?);
        }

        Ok(ChatTurn {
            reply,
            booked_city,
            image,
        })
    }
}
