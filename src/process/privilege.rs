//! # 权限检测
//!
//! 判断当前进程是否以管理员/root 身份运行。
//!
//! ## 依赖关系
//! - 被 `commands/antivirus.rs` 调用

use std::process::{Command, Stdio};

/// 当前进程是否拥有管理员/root 权限
///
/// 探测命令执行失败一律视为未提权。
pub fn is_elevated() -> bool {
    let elevated = if cfg!(windows) {
        probe_windows()
    } else if cfg!(unix) {
        probe_unix()
    } else {
        false
    };
    tracing::debug!(elevated, "privilege check");
    elevated
}

/// `net session` 只有管理员才能成功执行
fn probe_windows() -> bool {
    Command::new("cmd")
        .args(["/c", "net session"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn probe_unix() -> bool {
    match Command::new("id").arg("-u").stderr(Stdio::null()).output() {
        Ok(output) => is_root_uid(&String::from_utf8_lossy(&output.stdout)),
        Err(_) => false,
    }
}

fn is_root_uid(output: &str) -> bool {
    output.lines().next().map(str::trim) == Some("0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_root_uid() {
        assert!(is_root_uid("0\n"));
        assert!(!is_root_uid("1000\n"));
        assert!(!is_root_uid(""));
        assert!(!is_root_uid("10\n"));
    }
}
