//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 把日志写到 stderr，避免干扰正常输出。
//!
//! 过滤规则优先取环境变量 `DESKMATE_LOG`（EnvFilter 语法），
//! 否则由 `-v` 次数决定：0 → warn，1 → info，2+ → debug。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::{fmt, EnvFilter};

/// 日志过滤规则所读取的环境变量
pub const LOG_ENV: &str = "DESKMATE_LOG";

/// 根据 `-v` 次数得到默认过滤级别
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// 初始化全局日志订阅者
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    // 重复初始化（例如测试中）时忽略
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(5), "debug");
    }
}
