use csi_analyzer::analyzer::{self, ApiClient};
use csi_analyzer::config::Config;
use csi_analyzer::error::Result;
use csi_analyzer::{export, prompts};
use std::path::Path;

/// 凭证文件（第一行API key，第二行Base URL）
const CREDENTIAL_FILE: &str = "/mnt/workspace/xintong/api_key.txt";

/// 结果输出目录
const OUTPUT_ROOT: &str = "/mnt/workspace/xintong/pjh/All_result/csi_analysis_results/";

/// 待处理数据集（名称 + 图片文件夹）
const DATASETS: &[Dataset] = &[
    Dataset {
        name: "AibTrans",
        path: "/mnt/workspace/xintong/dataset/practice_ds_500/",
    },
    Dataset {
        name: "OCRMT30K",
        path: "/mnt/workspace/xintong/dataset/OCRMT30K-refine/whole_image_v2/",
    },
];

struct Dataset {
    name: &'static str,
    path: &'static str,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("🔍 csi-analyzer - 图像中文CSI批量分析\n");

    let config = Config::load(Path::new(CREDENTIAL_FILE))?;
    println!("使用模型: {}", config.model);
    println!("运行日期: {}", chrono::Local::now().format("%Y-%m-%d"));

    std::fs::create_dir_all(OUTPUT_ROOT)?;
    println!("结果保存地址: {}", OUTPUT_ROOT);

    let client = ApiClient::new(&config);

    for dataset in DATASETS {
        println!("\n{}", "=".repeat(60));
        println!("开始处理数据集: {}", dataset.name);
        println!("{}\n", "=".repeat(60));

        let report = analyzer::process_dataset(
            &client,
            Path::new(dataset.path),
            dataset.name,
            prompts::CSI_PROMPT,
        )
        .await?;

        let written = export::export_report(
            &report,
            Path::new(OUTPUT_ROOT),
            &config.model,
            dataset.name,
        )?;
        for path in &written {
            println!("保存: {}", path.display());
        }

        println!("\n数据集 {} 处理完成!", dataset.name);
        println!("成功处理: {} 张图片", report.results.len());
        println!("失败: {} 张图片", report.error_log.len());
    }

    println!("\n{}", "=".repeat(60));
    println!("所有数据集处理完成!");
    println!("{}", "=".repeat(60));

    Ok(())
}
