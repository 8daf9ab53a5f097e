//! 模型输出归一化
//!
//! 模型有时会把JSON包在markdown围栏（```json ... ```）里，
//! 先剥掉围栏再解析。解析失败时不丢弃原始输出，
//! 原样放进Error结果供人工排查。

use crate::analyzer::AnalysisResult;

/// 剥离可能存在的markdown围栏
///
/// 只剥一层：前缀 ```json 或 ```，后缀 ```，前后各trim一次。
fn strip_code_fence(raw: &str) -> &str {
    let mut clean = raw.trim();

    if let Some(rest) = clean.strip_prefix("```json") {
        clean = rest;
    } else if let Some(rest) = clean.strip_prefix("```") {
        clean = rest;
    }
    if let Some(rest) = clean.strip_suffix("```") {
        clean = rest;
    }

    clean.trim()
}

/// 把模型的原始回复解析为AnalysisResult
///
/// 回复不是合法JSON、或形态不符合约定时，返回携带原始回复
/// （未剥围栏的原文）的Error结果。
pub fn normalize(raw: &str) -> AnalysisResult {
    let clean = strip_code_fence(raw);

    let result = match serde_json::from_str::<AnalysisResult>(clean) {
        Ok(result) => result,
        Err(e) => {
            return AnalysisResult::Error {
                error: format!("JSON decode error: {}", e),
                raw_output: Some(raw.to_string()),
            }
        }
    };

    // 形态校验: Contain必须有条目，Not contain必须有理由
    let shape_error = match &result {
        AnalysisResult::Contain { items } if items.is_empty() => {
            Some("Contain结果的items为空")
        }
        AnalysisResult::NotContain { reason } if reason.is_empty() => {
            Some("Not contain结果的reason为空")
        }
        _ => None,
    };

    if let Some(message) = shape_error {
        return AnalysisResult::Error {
            error: message.to_string(),
            raw_output: Some(raw.to_string()),
        };
    }

    result
}
