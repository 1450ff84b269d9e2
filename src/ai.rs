// src/ai.rs
//! Generator client: turns the editor prompt into the final HTML document
//! through the Anthropic Messages API. A failed call is fatal to the run —
//! no retry, no fallback content.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 16_000;

const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
const ENV_MODEL: &str = "CLAUDE_MODEL";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Single blocking generation call; bounded output size.
    async fn generate(&self, prompt: &str) -> Result<String>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ClaudeClient {
    /// Reads `ANTHROPIC_API_KEY` (required) and `CLAUDE_MODEL` (optional
    /// override). A missing key is a fatal startup condition.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| anyhow!("Missing ANTHROPIC_API_KEY env var"))?;
        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    pub fn new(api_key: String, model: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("midia-grossa/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(300))
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key,
            model,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl TextGenerator for ClaudeClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Msg<'a>>,
        }
        #[derive(Deserialize)]
        struct Resp {
            content: Vec<Block>,
        }
        #[derive(Deserialize)]
        struct Block {
            #[serde(default)]
            text: String,
        }

        let req = Req {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Msg {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&req)
            .send()
            .await
            .context("calling anthropic messages api")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("anthropic api returned {status}: {body}");
        }

        let body: Resp = resp.json().await.context("decoding anthropic response")?;
        let text = body
            .content
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.trim().is_empty() {
            bail!("anthropic response contained no text");
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "claude"
    }
}

// --- Test helpers ---

/// Generator returning a fixed body; stands in for the API in tests.
pub struct FixedGenerator {
    pub body: String,
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.body.clone())
    }
    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Generator that always fails, for abort-path tests.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        bail!("authentication_error: invalid x-api-key")
    }
    fn name(&self) -> &'static str {
        "failing"
    }
}
