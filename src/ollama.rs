//! Generator collaborator: a thin, non-streaming client for a local
//! Ollama server.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
const TEMPERATURE: f64 = 0.7;

pub struct OllamaClient {
    host: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    pub fn new(host: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the server answers at all. Used once at startup; mid-run
    /// failures are handled per page by the caller.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.host);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Send one prompt and return the full response text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.host);
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": TEMPERATURE }
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Ollama request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Ollama returned {}: {}", status, text));
        }

        let json: serde_json::Value = resp.json().await.context("Invalid Ollama response")?;
        json["response"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("Missing response field in Ollama reply"))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_trailing_slash_normalized() {
        let client = OllamaClient::new("http://localhost:11434/", "test-model").unwrap();
        assert_eq!(client.host, "http://localhost:11434");
        assert_eq!(client.model(), "test-model");
    }
}
