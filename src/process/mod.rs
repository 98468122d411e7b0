//! # 外部进程模块
//!
//! 启动外部命令并逐行转发其输出。
//!
//! ## 功能
//! - 合并 stdout/stderr 为单一有序行流
//! - 可选超时
//! - 管理员/root 权限检测
//! - 各平台的杀毒检查命令预设
//!
//! ## 依赖关系
//! - 被 `commands/antivirus.rs`, `commands/run.rs` 调用
//! - 子模块: runner, privilege, antivirus

pub mod antivirus;
pub mod privilege;
pub mod runner;

pub use runner::{ProcessOutcome, ProcessRunner};
