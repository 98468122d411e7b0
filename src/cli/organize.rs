//! # organize 子命令 CLI 定义
//!
//! 按扩展名筛选文件，以"前缀 + 序号"命名复制或移动到输出目录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/organize.rs`

use crate::models::TransferAction;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 处理方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OrganizeMode {
    /// Copy under the new name, leaving the original in place
    Rename,
    /// Move under the new name, removing the original
    Move,
}

impl From<OrganizeMode> for TransferAction {
    fn from(mode: OrganizeMode) -> Self {
        match mode {
            OrganizeMode::Rename => TransferAction::Copy,
            OrganizeMode::Move => TransferAction::Move,
        }
    }
}

/// organize 子命令参数
#[derive(Args, Debug)]
pub struct OrganizeArgs {
    /// Folder to scan (recursively)
    pub input: PathBuf,

    /// Folder that receives the renamed files (created if missing)
    pub output: PathBuf,

    /// File extensions, comma separated (e.g. 'txt,jpg,png')
    #[arg(short, long)]
    pub ext: String,

    /// Copy ('rename') or move the matching files
    #[arg(short, long, value_enum, default_value = "rename")]
    pub mode: OrganizeMode,

    /// Name prefix; files become <prefix>01.ext, <prefix>02.ext, ...
    #[arg(short, long, env = "DESKMATE_PREFIX", default_value = "DeskMate_")]
    pub prefix: String,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Only show what would be done
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
