//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的百分比进度条，并把后台事件渲染到终端。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate
//! - 使用 `models/event.rs`

use crate::models::Event;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

/// 创建 0..=100 的百分比进度条
pub fn create_percent_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(100);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// 把后台事件渲染到终端
///
/// 进度事件只保留最新值，输出行原样写到 stdout。
pub struct EventReporter {
    bar: Option<ProgressBar>,
    no_matches: bool,
}

impl EventReporter {
    /// 带百分比进度条的渲染器
    pub fn with_bar(message: &str) -> Self {
        Self {
            bar: Some(create_percent_bar(message)),
            no_matches: false,
        }
    }

    /// 只输出文本行的渲染器
    pub fn lines_only() -> Self {
        Self {
            bar: None,
            no_matches: false,
        }
    }

    /// 处理一个事件
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Progress(p) => {
                if let Some(pb) = &self.bar {
                    pb.set_position(u64::from(p.min(100)));
                }
            }
            Event::Line(line) => match &self.bar {
                Some(pb) => pb.suspend(|| print_raw(&line)),
                None => print_raw(&line),
            },
            Event::NoMatches => self.no_matches = true,
        }
    }

    /// 是否收到过"无匹配"提示
    pub fn saw_no_matches(&self) -> bool {
        self.no_matches
    }

    /// 结束渲染，进度条定格在 100%
    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.set_position(100);
            pb.finish();
        }
    }
}

fn print_raw(line: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(line.as_bytes());
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_latest_progress() {
        let mut reporter = EventReporter::with_bar("test");
        reporter.apply(Event::Progress(30));
        reporter.apply(Event::Progress(60));
        assert_eq!(reporter.bar.as_ref().unwrap().position(), 60);
        reporter.finish();
        assert_eq!(reporter.bar.as_ref().unwrap().position(), 100);
    }

    #[test]
    fn test_reporter_remembers_no_matches() {
        let mut reporter = EventReporter::lines_only();
        assert!(!reporter.saw_no_matches());
        reporter.apply(Event::NoMatches);
        reporter.apply(Event::Progress(100));
        assert!(reporter.saw_no_matches());
    }
}
