//! 运行配置
//!
//! 凭证文件为两行文本：第一行API key，第二行服务Base URL。
//! 凭证在进程启动时读取一次，之后只以引用传入各组件。

use crate::error::{CsiError, Result};
use std::path::Path;
use std::time::Duration;

/// 默认模型标识（同时用于输出文件命名）
pub const DEFAULT_MODEL: &str = "gpt-5-2025-08-07-GlobalStandard";

/// 默认重试次数
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// 默认重试间隔（秒）
pub const DEFAULT_RETRY_WAIT_SECS: u64 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_attempts: u32,
    pub retry_wait: Duration,
}

impl Config {
    /// 从凭证文件加载配置
    ///
    /// 文件缺失或不足两行视为致命错误，启动阶段直接失败。
    pub fn load(credential_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(credential_path).map_err(|e| {
            CsiError::Config(format!(
                "无法读取凭证文件 {}: {}",
                credential_path.display(),
                e
            ))
        })?;

        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let api_key = lines
            .next()
            .ok_or_else(|| CsiError::Config("凭证文件第一行应为API key".into()))?
            .to_string();
        let base_url = lines
            .next()
            .ok_or_else(|| CsiError::Config("凭证文件第二行应为Base URL".into()))?
            .to_string();

        Ok(Self {
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_wait: Duration::from_secs(DEFAULT_RETRY_WAIT_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_two_line_file() {
        let path = std::env::temp_dir().join("csi-test-config-valid.txt");
        fs::write(&path, "sk-test-key \nhttps://api.example.com/v1\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api_key, "sk-test-key");
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_wait, Duration::from_secs(2));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/api_key.txt"));
        assert!(matches!(result, Err(CsiError::Config(_))));
    }

    #[test]
    fn test_load_single_line_file() {
        let path = std::env::temp_dir().join("csi-test-config-single.txt");
        fs::write(&path, "sk-test-key\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(CsiError::Config(_))));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_empty_file() {
        let path = std::env::temp_dir().join("csi-test-config-empty.txt");
        fs::write(&path, "\n  \n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(CsiError::Config(_))));

        fs::remove_file(&path).ok();
    }
}
