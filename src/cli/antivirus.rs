//! # antivirus 子命令 CLI 定义
//!
//! 运行各平台的杀毒/系统完整性检查命令
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/antivirus.rs`

use clap::{Args, ValueEnum};

/// 目标操作系统
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Platform {
    /// Windows (sfc, DISM, netsh, ...)
    Windows,
    /// Debian/Ubuntu Linux (ClamAV via apt)
    Linux,
    /// macOS (advice only)
    Mac,
}

impl Platform {
    /// 编译目标对应的平台
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::Mac,
            _ => Platform::Linux,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Mac => write!(f, "Mac"),
        }
    }
}

/// antivirus 子命令参数
#[derive(Args, Debug)]
pub struct AntivirusArgs {
    /// Operating system whose commands should be run (default: detected)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Kill the check after this many seconds (default: no limit)
    #[arg(long, env = "DESKMATE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Do not require administrator/root privileges
    #[arg(long, default_value_t = false)]
    pub skip_privilege_check: bool,
}
