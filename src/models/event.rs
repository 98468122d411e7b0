//! # 后台任务事件
//!
//! 后台任务向前台发送的有序事件：进度百分比、进程输出行、无匹配提示。
//!
//! ## 依赖关系
//! - 被 `worker.rs`, `batch/`, `process/` 和 `utils/progress.rs` 使用

/// 后台任务事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// 完成百分比，0..=100，单次运行内单调不减，最终为 100
    Progress(u8),
    /// 外部进程输出的一行（以 `\n` 结尾）
    Line(String),
    /// 扫描结果为空，未执行任何传输
    NoMatches,
}

/// 计算 `round(done / total * 100)`；`total` 为 0 时视为已完成
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let done = done.min(total) as u128;
    let total = total as u128;
    ((done * 200 + total) / (total * 2)) as u8
}
