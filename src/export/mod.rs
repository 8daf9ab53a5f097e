//! 结果持久化
//!
//! 每个数据集写一个结果JSON；错误日志仅在非空时写出。
//! 缩进4空格，非ASCII字符按原文输出（不转义）。

use crate::analyzer::DatasetReport;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 结果文件路径: `<model>_csi_analysis_<dataset>.json`
pub fn results_path(output_root: &Path, model: &str, dataset_name: &str) -> PathBuf {
    output_root.join(format!("{}_csi_analysis_{}.json", model, dataset_name))
}

/// 错误日志路径: `<model>_csi_analysis_<dataset>_error_log.json`
pub fn error_log_path(output_root: &Path, model: &str, dataset_name: &str) -> PathBuf {
    output_root.join(format!(
        "{}_csi_analysis_{}_error_log.json",
        model, dataset_name
    ))
}

/// 以4空格缩进写出JSON文件
fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;

    writer.flush()?;
    Ok(())
}

/// 写出一个数据集的结果与错误日志
///
/// 返回实际写出的文件路径（错误日志为空时只有结果文件）。
pub fn export_report(
    report: &DatasetReport,
    output_root: &Path,
    model: &str,
    dataset_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let results_file = results_path(output_root, model, dataset_name);
    write_pretty_json(&results_file, &report.results)?;
    written.push(results_file);

    if !report.error_log.is_empty() {
        let error_file = error_log_path(output_root, model, dataset_name);
        write_pretty_json(&error_file, &report.error_log)?;
        written.push(error_file);
    }

    Ok(written)
}
