//! # 进程执行器
//!
//! 启动外部进程，逐行把合并后的 stdout/stderr 交给监听者。
//!
//! ## 功能
//! - stdout/stderr 写入同一管道，由单个读取线程按写入顺序转发
//! - 每行以单个 `\n` 结尾（CRLF 归一化，非 UTF-8 字节有损替换）
//! - 启动失败时输出一行诊断信息而不是返回错误
//! - 可选超时：到期后终止子进程，不再转发任何行（输出关闭后仍在运行的进程同样受限）
//!
//! ## 依赖关系
//! - 被 `commands/antivirus.rs`, `commands/run.rs` 调用
//! - 无内部模块依赖

use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// 输出关闭后轮询进程退出的间隔
const WAIT_POLL: Duration = Duration::from_millis(50);

/// 进程运行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 进程已退出；被信号终止时没有退出码
    Exited { code: Option<i32> },
    /// 进程无法启动
    LaunchFailed(String),
    /// 超时后被终止
    TimedOut,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ProcessOutcome::Exited { code: Some(0) })
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessOutcome::Exited { code: Some(code) } => write!(f, "exit code {}", code),
            ProcessOutcome::Exited { code: None } => write!(f, "terminated by signal"),
            ProcessOutcome::LaunchFailed(reason) => write!(f, "launch failed: {}", reason),
            ProcessOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// 外部进程执行器
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// 创建执行器
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// 追加参数
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// 设置超时（默认无超时）
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// 命令行的可读形式
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 运行进程，每收到一行输出就调用一次 `on_line`
    ///
    /// 返回时所有输出行都已转发完毕。
    pub fn run<F>(&self, mut on_line: F) -> ProcessOutcome
    where
        F: FnMut(String),
    {
        tracing::info!(command = %self.command_line(), "launching process");

        // stdout 与 stderr 共用同一管道写端，输出顺序与进程写入顺序一致
        let (reader, writer) = match io::pipe() {
            Ok(pair) => pair,
            Err(e) => return self.launch_failed(e, &mut on_line),
        };
        let stderr_writer = match writer.try_clone() {
            Ok(w) => w,
            Err(e) => return self.launch_failed(e, &mut on_line),
        };

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer);
        let spawned = command.spawn();
        // 释放父进程持有的写端，否则读取端永远等不到 EOF
        drop(command);

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => return self.launch_failed(e, &mut on_line),
        };

        let (tx, rx) = mpsc::channel();
        spawn_reader(reader, tx);

        let deadline = self.timeout.map(|t| Instant::now() + t);

        loop {
            let received = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    rx.recv_timeout(remaining)
                }
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(line) => on_line(line),
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => return self.kill_on_timeout(&mut child),
            }
        }

        // 输出已关闭但进程可能仍在运行
        if let Some(deadline) = deadline {
            loop {
                match child.try_wait() {
                    Ok(Some(_)) => break,
                    Ok(None) if Instant::now() >= deadline => {
                        return self.kill_on_timeout(&mut child)
                    }
                    Ok(None) => thread::sleep(
                        WAIT_POLL.min(deadline.saturating_duration_since(Instant::now())),
                    ),
                    Err(e) => {
                        tracing::debug!(error = %e, "try_wait failed");
                        break;
                    }
                }
            }
        }

        let outcome = match child.wait() {
            Ok(status) => ProcessOutcome::Exited {
                code: status.code(),
            },
            Err(e) => ProcessOutcome::LaunchFailed(e.to_string()),
        };
        tracing::info!(command = %self.command_line(), %outcome, "process finished");
        outcome
    }

    fn launch_failed<F>(&self, e: io::Error, on_line: &mut F) -> ProcessOutcome
    where
        F: FnMut(String),
    {
        tracing::warn!(command = %self.command_line(), error = %e, "launch failed");
        on_line(format!("Error running commands: {}\n", e));
        ProcessOutcome::LaunchFailed(e.to_string())
    }

    fn kill_on_timeout(&self, child: &mut Child) -> ProcessOutcome {
        tracing::warn!(command = %self.command_line(), "process timed out, killing");
        let _ = child.kill();
        let _ = child.wait();
        ProcessOutcome::TimedOut
    }
}

/// 逐行读取一个输出流并发送到通道
fn spawn_reader<R>(stream: R, tx: Sender<String>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(normalize_line(&buf)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "output stream read failed");
                    break;
                }
            }
        }
    });
}

fn normalize_line(raw: &[u8]) -> String {
    let mut line = String::from_utf8_lossy(raw)
        .trim_end_matches(&['\n', '\r'][..])
        .to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line(b"hello\r\n"), "hello\n");
        assert_eq!(normalize_line(b"tail"), "tail\n");
        assert_eq!(normalize_line(b"\n"), "\n");
    }

    #[test]
    fn test_launch_failure_reports_single_line() {
        let mut lines = Vec::new();
        let outcome =
            ProcessRunner::new("deskmate-definitely-missing-binary").run(|l| lines.push(l));

        assert!(matches!(outcome, ProcessOutcome::LaunchFailed(_)));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error running commands: "));
        assert!(lines[0].ends_with('\n'));
    }

    #[cfg(unix)]
    #[test]
    fn test_lines_in_order_with_exit_code() {
        let mut lines = Vec::new();
        let outcome = ProcessRunner::new("sh")
            .args(["-c", "for i in 1 2 3 4 5; do echo line$i; done; exit 3"])
            .run(|l| lines.push(l));

        assert_eq!(outcome, ProcessOutcome::Exited { code: Some(3) });
        assert_eq!(
            lines,
            vec!["line1\n", "line2\n", "line3\n", "line4\n", "line5\n"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_merged_in_write_order() {
        for _ in 0..20 {
            let mut lines = Vec::new();
            let outcome = ProcessRunner::new("sh")
                .args(["-c", "echo 1; echo 2 1>&2; echo 3; echo 4 1>&2; echo 5"])
                .run(|l| lines.push(l));

            assert!(outcome.success());
            assert_eq!(lines, vec!["1\n", "2\n", "3\n", "4\n", "5\n"]);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_applies_after_output_closes() {
        let started = Instant::now();
        let outcome = ProcessRunner::new("sh")
            .args(["-c", "exec >&- 2>&-; sleep 6"])
            .timeout(Some(Duration::from_millis(300)))
            .run(|_| {});

        assert_eq!(outcome, ProcessOutcome::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_not_hit_by_quick_exit() {
        let outcome = ProcessRunner::new("sh")
            .args(["-c", "exec >&- 2>&-; exit 2"])
            .timeout(Some(Duration::from_secs(5)))
            .run(|_| {});

        assert_eq!(outcome, ProcessOutcome::Exited { code: Some(2) });
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_process() {
        let started = Instant::now();
        let mut lines = Vec::new();
        let outcome = ProcessRunner::new("sleep")
            .args(["5"])
            .timeout(Some(Duration::from_millis(200)))
            .run(|l| lines.push(l));

        assert_eq!(outcome, ProcessOutcome::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_command_line() {
        let runner = ProcessRunner::new("cmd").args(["/c", "net session"]);
        assert_eq!(runner.command_line(), "cmd /c net session");
    }
}
