use serde::{Deserialize, Serialize};

/// 单条CSI条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsiItem {
    /// 图中出现的原文（逐字）
    pub text: String,

    /// CSI类型标识，模型输出原样透传
    #[serde(rename = "type")]
    pub csi_type: String,

    /// 判定理由（中文）
    pub reason: String,
}

/// 单张图片的分析结果
///
/// 与落盘JSON一一对应，以 `status` 字段区分三种形态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AnalysisResult {
    /// 图中含有CSI
    Contain { items: Vec<CsiItem> },

    /// 图中不含CSI
    #[serde(rename = "Not contain")]
    NotContain { reason: String },

    /// 调用失败，或模型输出无法解析（此时raw_output保留原始输出）
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_output: Option<String>,
    },
}
