//! OpenAI兼容接口调用
//!
//! 单轮请求：一张图片（base64）加固定提示词，返回模型回复的自由文本。
//! 网络失败由 `call_with_retry` 做固定间隔的有限重试。

use super::VisionApi;
use crate::config::Config;
use crate::error::{CsiError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// 读取图片文件并编码为base64文本
///
/// 不限制大小，也不校验图片格式；无法读取时返回IO错误。
pub fn encode_image(image_path: &Path) -> Result<String> {
    let bytes = std::fs::read(image_path)?;
    Ok(STANDARD.encode(bytes))
}

/// Chat请求体
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

/// 用户消息的内容分片（图片在前，文本在后）
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat响应体（只取第一条choice的文本）
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// OpenAI兼容接口客户端
pub struct ApiClient {
    client: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    /// 发起一次多模态请求，返回模型回复文本
    ///
    /// 图片一律按 image/jpeg 标注（png也不例外），服务端按实际内容识别格式。
    pub async fn call(&self, prompt: &str, image_path: &Path) -> Result<String> {
        let base64_image = encode_image(image_path)?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{}", base64_image),
                        },
                    },
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CsiError::ApiCall(format!("HTTP {}: {}", status, body)));
        }

        let payload: ChatResponse = response.json().await?;

        payload
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or(CsiError::EmptyResponse)
    }
}

impl VisionApi for ApiClient {
    async fn analyze(&self, prompt: &str, image_path: &Path) -> Result<String> {
        let label = image_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        call_with_retry(
            &label,
            self.config.max_attempts,
            self.config.retry_wait,
            || self.call(prompt, image_path),
        )
        .await
    }
}

/// 有限次数的固定间隔重试
///
/// 第一次就成功则不等待；每次失败打印一条记录；
/// 全部失败时以最后一次的错误信息作为整体失败原因。
pub async fn call_with_retry<F, Fut>(
    label: &str,
    max_attempts: u32,
    retry_wait: Duration,
    mut call: F,
) -> Result<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match call().await {
            Ok(text) => return Ok(text),
            Err(e) => {
                last_error = e.to_string();
                println!("[{}] 第 {} 次失败：{}", label, attempt, e);
                if attempt < max_attempts {
                    tokio::time::sleep(retry_wait).await;
                }
            }
        }
    }

    Err(CsiError::RetriesExhausted {
        attempts: max_attempts,
        last_error,
    })
}
