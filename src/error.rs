use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsiError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("文件夹不存在: {0}")]
    FolderNotFound(String),

    #[error("API调用错误: {0}")]
    ApiCall(String),

    #[error("API响应中没有内容")]
    EmptyResponse,

    #[error("已重试 {attempts} 次仍失败: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP请求错误: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CsiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = CsiError::Config("凭证文件缺失".to_string());
        assert_eq!(format!("{}", error), "配置错误: 凭证文件缺失");
    }

    #[test]
    fn test_error_display_retries_exhausted() {
        let error = CsiError::RetriesExhausted {
            attempts: 3,
            last_error: "connection reset".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("3"));
        assert!(display.contains("connection reset"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: CsiError = io_error.into();
        assert!(matches!(error, CsiError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: CsiError = json_error.into();
        assert!(matches!(error, CsiError::JsonParse(_)));
    }
}
