//! # clean 子命令 CLI 定义
//!
//! 清理浏览器缓存文件夹
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/clean.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 浏览器类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Browser {
    /// Mozilla Firefox
    Firefox,
    /// Google Chrome
    Chrome,
    /// Microsoft Edge
    Edge,
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Browser::Firefox => write!(f, "Firefox"),
            Browser::Chrome => write!(f, "Chrome"),
            Browser::Edge => write!(f, "Edge"),
        }
    }
}

/// clean 子命令参数
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Browser whose cache should be cleaned
    #[arg(value_enum)]
    pub browser: Browser,

    /// Use this cache folder instead of the detected one
    #[arg(long)]
    pub path: Option<PathBuf>,
}
