//! # clean 命令实现
//!
//! 删除浏览器缓存文件夹中的所有文件（目录保留）。
//!
//! ## 依赖关系
//! - 使用 `cli/clean.rs` 定义的参数
//! - 使用 `utils/cache_paths.rs` 定位缓存
//! - 使用 `batch/deleter.rs` 在后台线程删除

use crate::batch::{self, BatchResult};
use crate::cli::clean::{Browser, CleanArgs};
use crate::error::{DeskmateError, Result};
use crate::utils::cache_paths::{resolve_cache_path, ProfileRoots};
use crate::utils::output;
use crate::utils::progress::EventReporter;
use crate::worker;

/// 执行 clean 命令
pub fn execute(args: CleanArgs) -> Result<()> {
    output::print_header(&format!("Cleaning Cache - {}", args.browser));

    let cache_path = match args.path {
        Some(path) => path,
        None => resolve_cache_path(args.browser, &ProfileRoots::from_env()).ok_or_else(|| {
            DeskmateError::CacheFolderUnresolved {
                browser: args.browser.to_string(),
            }
        })?,
    };

    if !cache_path.exists() {
        return Err(DeskmateError::CacheFolderNotFound {
            path: cache_path.display().to_string(),
        });
    }

    output::print_info(&format!("Cache folder: {}", cache_path.display()));

    let mut reporter = EventReporter::with_bar("Deleting");
    let root = cache_path.clone();
    let result = worker::run_with_progress(
        "deskmate-clean",
        move |sink| batch::scan_and_delete(&root, |e| sink.emit(e)),
        |e| reporter.apply(e),
    )??;
    reporter.finish();

    output::print_success(&completion_message(args.browser, &result));

    Ok(())
}

/// 完成提示；删除失败的文件只记录在日志里
fn completion_message(browser: Browser, result: &BatchResult) -> String {
    tracing::debug!(
        deleted = result.success,
        failed = result.failed,
        "cache clean finished"
    );
    format!("Cache cleaned for {}!", browser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::runner::ProcessResult;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_completion_message_hides_item_failures() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Failed(
            "/cache/entry".to_string(),
            "Access is denied".to_string(),
        ));
        assert_eq!(
            completion_message(Browser::Edge, &result),
            "Cache cleaned for Edge!"
        );
    }

    #[test]
    fn test_explicit_path_is_cleaned() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("cache2")).unwrap();
        fs::write(dir.path().join("cache2/entry"), "x").unwrap();

        execute(CleanArgs {
            browser: Browser::Firefox,
            path: Some(dir.path().to_path_buf()),
        })
        .unwrap();

        assert!(!dir.path().join("cache2/entry").exists());
        assert!(dir.path().join("cache2").is_dir());
    }

    #[test]
    fn test_missing_cache_folder_is_error() {
        let dir = tempdir().unwrap();
        let result = execute(CleanArgs {
            browser: Browser::Chrome,
            path: Some(dir.path().join("absent")),
        });
        assert!(matches!(result, Err(DeskmateError::CacheFolderNotFound { .. })));
    }
}
