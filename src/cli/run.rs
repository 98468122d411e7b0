//! # run 子命令 CLI 定义
//!
//! 运行任意外部命令，合并 stdout/stderr 实时输出
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Kill the command after this many seconds (default: no limit)
    #[arg(long, env = "DESKMATE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Program to execute
    pub program: String,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
