//! 数据集图片扫描
//!
//! 只扫描文件夹的直接子项，不递归。扩展名严格区分大小写，
//! `.JPG` 等大写后缀不在处理范围内。

use crate::error::{CsiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(CsiError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 直接子项（不递归）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                images.push(ImageInfo {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // 按文件名排序，保证处理与输出顺序稳定
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// 扩展名是否为受支持的图片格式（严格区分大小写）
#[cfg(test)]
fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}
