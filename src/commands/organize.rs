//! # organize 命令实现
//!
//! 扫描输入目录，按扩展名筛选文件，以顺序命名复制或移动到输出目录。
//!
//! ## 功能
//! - 扩展名规范化与前缀默认值
//! - 执行前确认（`--yes` 跳过）
//! - `--dry-run` 只打印命名计划表
//! - 后台线程执行，前台显示百分比进度
//! - 单个文件失败不中止，只记录到日志
//!
//! ## 依赖关系
//! - 使用 `cli/organize.rs` 定义的参数
//! - 使用 `batch/`, `models/`, `worker.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{self, BatchResult, BatchRunner, FileCollector};
use crate::cli::organize::OrganizeArgs;
use crate::error::{DeskmateError, Result};
use crate::models::{NamingPattern, ScanFilter, TransferAction};
use crate::utils::output;
use crate::utils::progress::EventReporter;
use crate::worker;

use console::Term;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 命名计划表的一行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Target")]
    target: String,
}

/// 执行 organize 命令
pub fn execute(args: OrganizeArgs) -> Result<()> {
    let action = TransferAction::from(args.mode);
    output::print_header(&format!("{} Files", action));

    // 验证输入目录
    if !args.input.exists() {
        return Err(DeskmateError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }
    if !args.input.is_dir() {
        return Err(DeskmateError::NotADirectory {
            path: args.input.display().to_string(),
        });
    }
    if args.output.exists() && !args.output.is_dir() {
        return Err(DeskmateError::NotADirectory {
            path: args.output.display().to_string(),
        });
    }

    let filter = ScanFilter::parse(&args.ext)?;
    let naming = NamingPattern::new(&args.prefix);

    output::print_field("Action", action.label());
    output::print_field("Extensions", &filter.to_string());
    output::print_field("From", &args.input.display().to_string());
    output::print_field("To", &args.output.display().to_string());
    output::print_field("Pattern", &format!("{}01, {}02, ...", naming.prefix(), naming.prefix()));
    println!();

    if args.dry_run {
        return print_plan(&args.input, &args.output, filter, action, naming);
    }

    if !args.yes && !confirm(&format!("{} files?", action))? {
        output::print_info("Cancelled.");
        return Ok(());
    }

    fs::create_dir_all(&args.output).map_err(|e| DeskmateError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let mut reporter = EventReporter::with_bar(action.label());
    let input = args.input.clone();
    let destination = args.output.clone();
    let result = worker::run_with_progress(
        "deskmate-organize",
        move |sink| {
            batch::scan_and_transfer(&input, destination, filter, action, naming, |e| {
                sink.emit(e)
            })
        },
        |e| reporter.apply(e),
    )??;
    reporter.finish();

    if reporter.saw_no_matches() {
        output::print_info(&no_matches_message(action));
        return Ok(());
    }

    output::print_separator();
    output::print_done(&completion_message(action, &result));

    Ok(())
}

fn no_matches_message(action: TransferAction) -> String {
    format!("No matching files found to {}.", action.label().to_lowercase())
}

/// 完成提示；单个文件的失败只进日志，不在这里出现
fn completion_message(action: TransferAction, result: &BatchResult) -> String {
    tracing::debug!(
        success = result.success,
        failed = result.failed,
        "{} finished",
        action
    );
    format!("{} operation completed!", action)
}

/// 打印命名计划，不修改任何文件
fn print_plan(
    input: &Path,
    output_dir: &Path,
    filter: ScanFilter,
    action: TransferAction,
    naming: NamingPattern,
) -> Result<()> {
    let files = FileCollector::new(input.to_path_buf())
        .with_filter(filter)
        .collect()?;

    if files.is_empty() {
        output::print_info(&no_matches_message(action));
        return Ok(());
    }

    let runner = BatchRunner::new(output_dir.to_path_buf(), action, naming);
    let rows = plan_rows(input, &runner.plan(&files));

    println!("{}", Table::new(rows));
    output::print_info(&format!("[DRY] {} file(s) would be processed", files.len()));
    Ok(())
}

fn plan_rows(input: &Path, plan: &[(PathBuf, PathBuf)]) -> Vec<PlanRow> {
    let input = fs::canonicalize(input).unwrap_or_else(|_| input.to_path_buf());
    plan.iter()
        .enumerate()
        .map(|(i, (src, dst))| PlanRow {
            index: i + 1,
            source: src
                .strip_prefix(&input)
                .unwrap_or(src)
                .display()
                .to_string(),
            target: dst.display().to_string(),
        })
        .collect()
}

/// 在终端询问 y/N
fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    if !term.is_term() {
        return Err(DeskmateError::InvalidArgument(
            "confirmation required but stdin is not a terminal; pass --yes".to_string(),
        ));
    }

    term.write_str(&format!("{} [y/N] ", question))
        .and_then(|_| term.read_line())
        .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
        .map_err(|e| DeskmateError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })
}
