use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tokio::time::Duration;

/// Rendering collaborator: turns a booked city into a raster image.
/// One opaque external call, no retry.
#[async_trait]
pub trait Artist: Send + Sync {
    async fn render_city(&self, city: &str) -> anyhow::Result<Vec<u8>>;
}

pub struct OpenAiArtist {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl OpenAiArtist {
    pub fn new(base_url: String, api_key: String) -> anyhow::Result<Self> {
        // Image generation routinely takes longer than chat completion.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }
}

#[async_trait]
impl Artist for OpenAiArtist {
    async fn render_city(&self, city: &str) -> anyhow::Result<Vec<u8>> {
        let url = format!("{}/images/generations", self.base_url);
        let req = serde_json::json!({
            "model": "dall-e-3",
            "prompt": format!(
                "An image representing a vacation in {city}, showing tourist spots \
                 and everything unique about {city}, in a simple art style"
            ),
            "size": "1024x1024",
            "n": 1,
            "response_format": "b64_json"
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
            .map_err(|e| anyhow::anyhow!("Failed to parse image response: {}", e))?;

        if let Some(error) = response_json.get("error") {
            return Err(anyhow::anyhow!("Image API error: {}", error));
        }

        let b64 = response_json["data"][0]["b64_json"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("No image data in response"))?;

        let bytes = STANDARD
            .decode(b64)
            .map_err(|e| anyhow::anyhow!("Failed to decode image payload: {}", e))?;
        Ok(bytes)
    }
}
