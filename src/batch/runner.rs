//! # 批量传输执行器
//!
//! 按扫描顺序逐个复制或移动文件，并按顺序命名。
//!
//! ## 功能
//! - 目标名 = 前缀 + 两位序号 + 原扩展名
//! - 目标已存在时直接覆盖
//! - 单个文件失败只记录，不中止批处理
//! - 每个文件处理后发出进度事件
//!
//! ## 依赖关系
//! - 被 `batch/mod.rs`, `commands/organize.rs` 调用
//! - 使用 `models/` 中的命名模式、传输动作和事件

use crate::models::naming::extension_of;
use crate::models::{percent, Event, NamingPattern, TransferAction};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量传输执行器
pub struct BatchRunner {
    /// 目标目录
    destination: PathBuf,
    /// 复制或移动
    action: TransferAction,
    /// 命名模式
    naming: NamingPattern,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(destination: PathBuf, action: TransferAction, naming: NamingPattern) -> Self {
        Self {
            destination,
            action,
            naming,
        }
    }

    /// 计算每个文件的目标路径，不触碰文件系统
    pub fn plan(&self, files: &[PathBuf]) -> Vec<(PathBuf, PathBuf)> {
        files
            .iter()
            .enumerate()
            .map(|(idx, src)| (src.clone(), self.target_for(idx + 1, src)))
            .collect()
    }

    /// 按列表顺序处理文件
    ///
    /// 列表为空时先发出 `Event::NoMatches`，再发出 100% 进度。
    pub fn run<F>(&self, files: &[PathBuf], mut on_event: F) -> BatchResult
    where
        F: FnMut(Event),
    {
        let mut batch_result = BatchResult::default();
        let total = files.len();

        if total == 0 {
            tracing::info!("no files matched, nothing to {}", self.action.label().to_lowercase());
            on_event(Event::NoMatches);
            on_event(Event::Progress(100));
            return batch_result;
        }

        tracing::info!(
            total,
            action = %self.action,
            destination = %self.destination.display(),
            "batch transfer started"
        );

        for (sequence, src) in (1..).zip(files) {
            let target = self.target_for(sequence, src);

            let result = match self.transfer(src, &target) {
                Ok(()) => {
                    tracing::debug!(src = %src.display(), target = %target.display(), "transferred");
                    ProcessResult::Success(target.display().to_string())
                }
                Err(e) => {
                    tracing::warn!(
                        src = %src.display(),
                        target = %target.display(),
                        error = %e,
                        "transfer failed, skipping"
                    );
                    ProcessResult::Failed(src.display().to_string(), e.to_string())
                }
            };
            batch_result.merge(result);

            on_event(Event::Progress(percent(sequence, total)));
        }

        tracing::info!(
            success = batch_result.success,
            failed = batch_result.failed,
            "batch transfer finished"
        );
        batch_result
    }

    /// 第 `sequence` 个文件的目标路径
    fn target_for(&self, sequence: usize, src: &Path) -> PathBuf {
        let file_name = src
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let name = self.naming.file_name(sequence, extension_of(&file_name));
        self.destination.join(name)
    }

    fn transfer(&self, src: &Path, target: &Path) -> io::Result<()> {
        // 源与目标为同一文件时，覆盖式复制会截断源文件
        if is_same_file(src, target) {
            return Ok(());
        }
        match self.action {
            TransferAction::Copy => fs::copy(src, target).map(|_| ()),
            TransferAction::Move => move_file(src, target),
        }
    }
}

/// 移动文件，跨文件系统时退化为复制后删除
///
/// 复制失败时源文件保持不变。
fn move_file(src: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(src, target) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(error = %rename_err, "rename failed, falling back to copy + delete");
            fs::copy(src, target)?;
            fs::remove_file(src)
        }
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
