//! # run 命令实现
//!
//! 在后台线程运行外部命令，前台逐行打印输出并报告退出状态。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `process/runner.rs`, `worker.rs`, `utils/`

use crate::cli::run::RunArgs;
use crate::error::{DeskmateError, Result};
use crate::models::Event;
use crate::process::{ProcessOutcome, ProcessRunner};
use crate::utils::output;
use crate::utils::progress::EventReporter;
use crate::worker;

use std::time::Duration;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    let runner = ProcessRunner::new(args.program)
        .args(args.args)
        .timeout(args.timeout.map(Duration::from_secs));

    output::print_header(&format!("Running: {}", runner.command_line()));
    stream_process(runner, args.timeout)
}

/// 运行进程并把输出行打印到终端，非零退出视为失败
pub(crate) fn stream_process(runner: ProcessRunner, timeout_secs: Option<u64>) -> Result<()> {
    let command = runner.command_line();
    let mut reporter = EventReporter::lines_only();

    let outcome = worker::run_with_progress(
        "deskmate-process",
        move |sink| runner.run(|line| sink.emit(Event::Line(line))),
        |e| reporter.apply(e),
    )?;
    reporter.finish();

    output::print_separator();
    if outcome.success() {
        output::print_done("Command finished successfully");
        return Ok(());
    }

    match outcome {
        ProcessOutcome::TimedOut => Err(DeskmateError::CommandTimedOut {
            command,
            seconds: timeout_secs.unwrap_or_default(),
        }),
        // 启动失败的诊断行已经打印过
        other => Err(DeskmateError::CommandFailed {
            command,
            status: other.to_string(),
        }),
    }
}
