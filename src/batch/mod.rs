//! # 批量处理模块
//!
//! 提供目录扫描、批量重命名/移动和递归删除能力。
//!
//! ## 功能
//! - 递归收集常规文件，可按扩展名过滤
//! - 按顺序命名复制或移动文件
//! - 递归删除目录下的文件（保留目录）
//! - 每处理一个文件发出一次进度事件
//!
//! ## 依赖关系
//! - 被 `commands/organize.rs`, `commands/clean.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `models/` 中的过滤器、命名模式与事件

pub mod collector;
pub mod deleter;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner};

use crate::error::Result;
use crate::models::{Event, NamingPattern, ScanFilter, TransferAction};
use std::path::{Path, PathBuf};

/// 扫描 `root` 下匹配 `filter` 的文件并按顺序命名传输到 `destination`
///
/// 遍历失败会中止整个操作；单个文件的传输失败只计入结果。
pub fn scan_and_transfer<F>(
    root: &Path,
    destination: PathBuf,
    filter: ScanFilter,
    action: TransferAction,
    naming: NamingPattern,
    on_event: F,
) -> Result<BatchResult>
where
    F: FnMut(Event),
{
    let files = FileCollector::new(root.to_path_buf())
        .with_filter(filter)
        .collect()?;
    let runner = BatchRunner::new(destination, action, naming);
    Ok(runner.run(&files, on_event))
}

/// 删除 `root` 下的所有常规文件
pub fn scan_and_delete<F>(root: &Path, on_event: F) -> Result<BatchResult>
where
    F: FnMut(Event),
{
    deleter::delete_files(root, on_event)
}
