//! # 文件收集器
//!
//! 递归收集目录下的常规文件。
//!
//! ## 功能
//! - 递归目录遍历（不进入符号链接目录，指向文件的链接照常收集）
//! - 按扩展名过滤
//! - 同一文件系统状态下结果顺序确定（按文件名排序遍历）
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `batch/deleter.rs` 的调用方使用
//! - 使用 `walkdir` 遍历目录

use crate::error::{DeskmateError, Result};
use crate::models::ScanFilter;

use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 扩展名过滤器，`None` 表示收集全部文件
    filter: Option<ScanFilter>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self { root, filter: None }
    }

    /// 设置扩展名过滤器
    pub fn with_filter(mut self, filter: ScanFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// 收集所有匹配的文件，返回绝对路径
    ///
    /// 任一子目录无法读取都会使整个扫描失败。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(DeskmateError::DirectoryNotFound {
                path: self.root.display().to_string(),
            });
        }
        if !self.root.is_dir() {
            return Err(DeskmateError::NotADirectory {
                path: self.root.display().to_string(),
            });
        }

        let root = fs::canonicalize(&self.root).map_err(|e| DeskmateError::FileReadError {
            path: self.root.display().to_string(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| DeskmateError::ScanFailed {
                path: root.display().to_string(),
                source: e,
            })?;

            // 不沿链接下降，但指向常规文件的链接按文件收集
            let is_file = if entry.path_is_symlink() {
                entry.path().is_file()
            } else {
                entry.file_type().is_file()
            };
            if !is_file {
                continue;
            }

            if let Some(filter) = &self.filter {
                let name = entry.file_name().to_string_lossy();
                if !filter.matches(&name) {
                    continue;
                }
            }

            files.push(entry.into_path());
        }

        tracing::debug!(root = %root.display(), count = files.len(), "scan finished");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_collects_recursively_without_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("sub/b.jpg"), "b").unwrap();
        fs::write(dir.path().join("sub/deeper/c.txt"), "c").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert_eq!(names(&files), vec!["a.txt", "b.jpg", "c.txt"]);
        assert!(files.iter().all(|p| p.is_absolute() && p.is_file()));
    }

    #[test]
    fn test_filter_by_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.TXT"), "a").unwrap();
        fs::write(dir.path().join("b.jpg"), "b").unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_filter(ScanFilter::parse("txt").unwrap())
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.TXT", "c.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_collected() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("real.txt"), "r").unwrap();
        fs::create_dir(outside.path().join("linked_dir")).unwrap();
        fs::write(outside.path().join("linked_dir/inner.txt"), "i").unwrap();
        std::os::unix::fs::symlink(outside.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path().join("linked_dir"), dir.path().join("dir_link"))
            .unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_filter(ScanFilter::parse("txt").unwrap())
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["link.txt"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        let result = FileCollector::new(dir.path().join("nope")).collect();
        assert!(matches!(result, Err(DeskmateError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_file_root_is_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let result = FileCollector::new(file).collect();
        assert!(matches!(result, Err(DeskmateError::NotADirectory { .. })));
    }
}
