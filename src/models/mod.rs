//! # 数据模型模块
//!
//! 定义批处理与进程编排共享的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `process/`, `worker.rs` 和 `commands/` 使用
//! - 子模块: filter, naming, event

pub mod event;
pub mod filter;
pub mod naming;

pub use event::{percent, Event};
pub use filter::ScanFilter;
pub use naming::{NamingPattern, TransferAction};
