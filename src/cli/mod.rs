//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `clean`: 清理浏览器缓存
//! - `antivirus`: 运行系统杀毒检查
//! - `organize`: 按扩展名批量重命名/移动文件
//! - `run`: 运行任意外部命令并实时输出
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: clean, antivirus, organize, run

pub mod antivirus;
pub mod clean;
pub mod organize;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};

/// DeskMate - 桌面维护小工具
#[derive(Parser)]
#[command(name = "deskmate")]
#[command(version)]
#[command(about = "Clean browser caches, run antivirus checks and batch rename files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); DESKMATE_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Delete every file inside a browser's cache folder
    Clean(clean::CleanArgs),

    /// Run the platform's antivirus / integrity check commands
    Antivirus(antivirus::AntivirusArgs),

    /// Copy or move files by extension into a folder with sequential names
    Organize(organize::OrganizeArgs),

    /// Run an external command and stream its output
    Run(run::RunArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_organize() {
        let cli = Cli::try_parse_from([
            "deskmate", "organize", "in", "out", "--ext", "txt,jpg", "--mode", "move",
            "--prefix", "Doc_", "--yes",
        ])
        .unwrap();
        match cli.command {
            Commands::Organize(args) => {
                assert_eq!(args.ext, "txt,jpg");
                assert_eq!(args.mode, organize::OrganizeMode::Move);
                assert_eq!(args.prefix, "Doc_");
                assert!(args.yes);
                assert!(!args.dry_run);
            }
            _ => panic!("expected organize"),
        }
    }

    #[test]
    fn test_parse_run_keeps_trailing_args() {
        let cli = Cli::try_parse_from(["deskmate", "-v", "run", "--", "ls", "-la", "/tmp"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.program, "ls");
                assert_eq!(args.args, vec!["-la", "/tmp"]);
                assert_eq!(args.timeout, None);
            }
            _ => panic!("expected run"),
        }
    }
}
