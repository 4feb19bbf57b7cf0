use serde_json::Value;
use tokio::time::Duration;

use crate::types::Message;

#[derive(Clone)]
pub struct LlmClient {
    base_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl LlmClient {
    pub fn new(base_url: String, api_key: String, model: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(8)
            .tcp_keepalive(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            base_url,
            api_key,
            model,
            http,
        })
    }

    /// One chat-completion round trip. The assistant message comes back
    /// as-is, tool_calls included; no retry, no backoff.
    pub async fn chat_once(&self, messages: &[Message], tools: &Value) -> anyhow::Result<Message> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "tools": tools,
            "stream": false
        });

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        let response_json: Value = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))?;

        if let Some(error) = response_json.get("error") {
            return Err(anyhow::anyhow!("API error: {}", error));
        }

        let choice = response_json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| anyhow::anyhow!("No choices in response"))?;

        let message: Message = serde_json::from_value(choice["message"].clone())
            .map_err(|e| anyhow::anyhow!("Failed to parse message: {}", e))?;

        Ok(message)
    }
}
