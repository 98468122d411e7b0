//! # antivirus 命令实现
//!
//! 检查权限后运行平台预设的杀毒/系统检查命令，实时输出结果。
//!
//! ## 依赖关系
//! - 使用 `cli/antivirus.rs` 定义的参数
//! - 使用 `process/` 的权限检测、命令预设与执行器
//! - 使用 `commands/run.rs` 的流式执行

use super::run::stream_process;
use crate::cli::antivirus::{AntivirusArgs, Platform};
use crate::error::{DeskmateError, Result};
use crate::process::{antivirus, privilege};
use crate::utils::output;

use std::time::Duration;

/// 执行 antivirus 命令
pub fn execute(args: AntivirusArgs) -> Result<()> {
    if !args.skip_privilege_check && !privilege::is_elevated() {
        return Err(DeskmateError::PrivilegeRequired);
    }

    let platform = args.platform.unwrap_or_else(Platform::current);
    output::print_header(&format!("Antivirus Check - {}", platform));

    let runner = antivirus::command_for(platform).timeout(args.timeout.map(Duration::from_secs));
    stream_process(runner, args.timeout)
}
