//! # DeskMate - 桌面维护小工具
//!
//! 浏览器缓存清理、系统杀毒检查、按扩展名批量重命名/移动文件。
//!
//! ## 子命令
//! - `clean`     - 清理 Firefox / Chrome / Edge 缓存
//! - `antivirus` - 运行平台自带或第三方的杀毒检查命令
//! - `organize`  - 按扩展名筛选并以顺序命名复制/移动文件
//! - `run`       - 运行任意外部命令并实时输出
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (扫描、批量传输、递归删除)
//!   │     ├── process/   (外部进程、权限检测)
//!   │     ├── worker.rs  (后台线程 + 有序事件通道)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、日志、缓存路径)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod process;
mod utils;
mod worker;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
