//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `process/`, `worker.rs`, `utils/`
//! - 子模块: clean, antivirus, organize, run

pub mod antivirus;
pub mod clean;
pub mod organize;
pub mod run;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Clean(args) => clean::execute(args),
        Commands::Antivirus(args) => antivirus::execute(args),
        Commands::Organize(args) => organize::execute(args),
        Commands::Run(args) => run::execute(args),
    }
}
