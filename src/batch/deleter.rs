//! # 递归删除
//!
//! 删除目录树下的所有常规文件，目录本身保留。
//!
//! 单个文件删除失败会被静默跳过（仅记录 debug 日志），
//! 每次删除尝试后都会发出进度事件。
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs`, `commands/clean.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件

use super::collector::FileCollector;
use super::runner::{BatchResult, ProcessResult};
use crate::error::Result;
use crate::models::{percent, Event};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 删除 `root` 下的所有常规文件
pub fn delete_files<F>(root: &Path, mut on_event: F) -> Result<BatchResult>
where
    F: FnMut(Event),
{
    let files = FileCollector::new(root.to_path_buf()).collect()?;
    let total = files.len();
    let mut batch_result = BatchResult::default();

    if total == 0 {
        on_event(Event::Progress(100));
        return Ok(batch_result);
    }

    tracing::info!(root = %root.display(), total, "deleting files");

    for (deleted, file) in (1..).zip(&files) {
        let result = match fs::remove_file(file) {
            Ok(()) => ProcessResult::Success(file.display().to_string()),
            // 已被其他进程删除
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ProcessResult::Success(file.display().to_string())
            }
            Err(e) => {
                tracing::debug!(file = %file.display(), error = %e, "delete failed, ignored");
                ProcessResult::Failed(file.display().to_string(), e.to_string())
            }
        };
        batch_result.merge(result);

        on_event(Event::Progress(percent(deleted, total)));
    }

    tracing::info!(
        deleted = batch_result.success,
        failed = batch_result.failed,
        "delete finished"
    );
    Ok(batch_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deletes_files_and_keeps_directories() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("entries/a")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("index"), "i").unwrap();
        fs::write(root.join("entries/one"), "1").unwrap();
        fs::write(root.join("entries/a/two"), "2").unwrap();
        fs::write(root.join("entries/a/three"), "3").unwrap();

        let mut events = Vec::new();
        let result = delete_files(root, |e| events.push(e)).unwrap();

        assert_eq!(result.success, 4);
        assert!(!root.join("index").exists());
        assert!(!root.join("entries/one").exists());
        assert!(root.join("entries/a").is_dir());
        assert!(root.join("empty").is_dir());
        assert_eq!(
            events,
            vec![
                Event::Progress(25),
                Event::Progress(50),
                Event::Progress(75),
                Event::Progress(100),
            ]
        );
    }

    #[test]
    fn test_empty_tree_reports_completion_once() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut events = Vec::new();
        let result = delete_files(dir.path(), |e| events.push(e)).unwrap();

        assert_eq!(result.total(), 0);
        assert_eq!(events, vec![Event::Progress(100)]);
        assert!(dir.path().join("sub").is_dir());
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = tempdir().unwrap();
        let mut events = Vec::new();
        assert!(delete_files(&dir.path().join("missing"), |e| events.push(e)).is_err());
        assert!(events.is_empty());
    }
}
