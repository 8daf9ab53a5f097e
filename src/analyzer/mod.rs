//! 数据集批量分析
//!
//! 单线程顺序处理：同一时刻只有一张图片、一个请求在途。
//! 单张图片的失败被吸收进结果映射，不会中断整个批次。

mod api;
mod types;

pub use api::{call_with_retry, encode_image, ApiClient};
pub use types::{AnalysisResult, CsiItem};

use crate::error::{CsiError, Result};
use crate::parser;
use crate::scanner;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;

/// 图片文件名 -> 分析结果
pub type BatchResults = BTreeMap<String, AnalysisResult>;

/// 图片文件名 -> 最后一次调用错误（只记录重试耗尽的图片，
/// 解析失败不在此列）
pub type ErrorLog = BTreeMap<String, String>;

/// 一个数据集批次的产出
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub results: BatchResults,
    pub error_log: ErrorLog,
}

/// 视觉模型调用接口
///
/// `ApiClient` 是生产实现；测试用桩实现替换。
/// 失败时约定返回 `RetriesExhausted`，携带最后一次的错误信息。
pub trait VisionApi {
    fn analyze(
        &self,
        prompt: &str,
        image_path: &Path,
    ) -> impl Future<Output = Result<String>>;
}

/// 处理一个数据集文件夹
///
/// 逐张调用模型并归一化输出；每张图片在结果映射里恰好占一项。
pub async fn process_dataset<A: VisionApi>(
    api: &A,
    folder: &Path,
    dataset_name: &str,
    prompt: &str,
) -> Result<DatasetReport> {
    let images = scanner::scan_folder(folder)?;

    println!("处理数据集: {}", dataset_name);
    println!("在 {} 中找到 {} 张图片", folder.display(), images.len());

    let mut results = BatchResults::new();
    let mut error_log = ErrorLog::new();

    let progress = ProgressBar::new(images.len() as u64);

    for image in &images {
        match api.analyze(prompt, &image.path).await {
            Ok(output) => {
                let result = parser::normalize(&output);
                if let AnalysisResult::Error {
                    error,
                    raw_output: Some(_),
                } = &result
                {
                    progress.println(format!("[{}] JSON解析失败: {}", image.file_name, error));
                }
                results.insert(image.file_name.clone(), result);
            }
            Err(e) => {
                // 调用层失败：结果与错误日志都记录同一条错误信息
                let message = match e {
                    CsiError::RetriesExhausted {
                        attempts,
                        last_error,
                    } => {
                        progress.println(format!(
                            "[{}] 已重试 {} 次仍失败",
                            image.file_name, attempts
                        ));
                        last_error
                    }
                    other => {
                        let message = other.to_string();
                        progress.println(format!("[{}] 调用失败: {}", image.file_name, message));
                        message
                    }
                };

                results.insert(
                    image.file_name.clone(),
                    AnalysisResult::Error {
                        error: message.clone(),
                        raw_output: None,
                    },
                );
                error_log.insert(image.file_name.clone(), message);
            }
        }
        progress.inc(1);
    }

    progress.finish();

    Ok(DatasetReport { results, error_log })
}
