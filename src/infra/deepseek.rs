use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;

use crate::infra::config::DeepseekConfig;
use crate::infra::upstream::UpstreamError;

const PROVIDER: &str = "deepseek";

#[derive(Debug, Serialize)]
struct ChatCompletionPayload<'a> {
    model: &'a str,
    messages: &'a [Value],
}

/// DeepSeek chat/completions 客户端，同步请求，不走流式输出
#[derive(Clone)]
pub struct DeepseekClient {
    client: Client,
    config: DeepseekConfig,
}

impl DeepseekClient {
    pub fn new(client: Client, config: DeepseekConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// POST {endpoint}/chat/completions，响应体原样返回
    pub async fn chat_completions(&self, messages: &[Value]) -> Result<Value, UpstreamError> {
        let url = format!("{}/chat/completions", self.config.endpoint);
        let payload = ChatCompletionPayload {
            model: &self.config.model,
            messages,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::send(PROVIDER, e))?;

        resp.json::<Value>()
            .await
            .map_err(|e| UpstreamError::body(PROVIDER, e))
    }
}
