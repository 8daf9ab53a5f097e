//! 真实接口冒烟测试
//!
//! 需要环境变量 CSI_API_KEY / CSI_BASE_URL；未设置时直接跳过。

use csi_analyzer::analyzer::{ApiClient, VisionApi};
use csi_analyzer::config::Config;
use csi_analyzer::parser;
use std::time::Duration;

/// 1x1透明PNG
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[tokio::test]
async fn chat_api_integration() {
    let api_key = match std::env::var("CSI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("CSI_API_KEY not set; skipping integration test");
            return;
        }
    };
    let base_url = match std::env::var("CSI_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("CSI_BASE_URL not set; skipping integration test");
            return;
        }
    };
    let model = std::env::var("CSI_MODEL")
        .unwrap_or_else(|_| csi_analyzer::config::DEFAULT_MODEL.to_string());

    let config = Config {
        api_key,
        base_url,
        model,
        max_attempts: 3,
        retry_wait: Duration::from_secs(2),
    };

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let image_path = dir.path().join("integration-test.png");
    std::fs::write(&image_path, TINY_PNG).unwrap();

    let prompt = r#"Ignore the image content. Return ONLY this JSON object, nothing else:
{"status": "Not contain", "reason": "integration test"}
"#;

    let client = ApiClient::new(&config);
    let response = client
        .analyze(prompt, &image_path)
        .await
        .expect("api call failed");
    assert!(!response.is_empty());

    // 模型可能加围栏，归一化后应能解析为约定形态
    let result = parser::normalize(&response);
    assert!(!matches!(
        result,
        csi_analyzer::analyzer::AnalysisResult::Error { raw_output: Some(_), .. }
    ));
}
