//! # 杀毒检查命令预设
//!
//! 各平台调用系统自带或第三方工具的命令行。
//!
//! ## 依赖关系
//! - 被 `commands/antivirus.rs` 调用
//! - 使用 `cli/antivirus.rs` 定义的平台枚举

use super::runner::ProcessRunner;
use crate::cli::antivirus::Platform;

const WINDOWS_PIPELINE: &str = "sfc /scannow && \
    DISM /Online /Cleanup-Image /RestoreHealth && \
    wmic startup get caption,command && \
    netstat -ano && \
    tasklist | findstr [PID] && \
    schtasks /query /fo LIST /v && \
    sc query type= service state= all && \
    netsh advfirewall reset && \
    netsh int ip reset && \
    netsh winsock reset";

const LINUX_PIPELINE: &str = "sudo apt-get update && \
    sudo apt-get install clamav -y && \
    sudo freshclam && \
    sudo clamscan -r /";

const MAC_PIPELINE: &str =
    "echo 'No built-in AV scanner. Consider installing ClamAV or using third-party software.'";

/// 构造指定平台的检查命令
pub fn command_for(platform: Platform) -> ProcessRunner {
    match platform {
        Platform::Windows => ProcessRunner::new("cmd").args(["/c", WINDOWS_PIPELINE]),
        Platform::Linux => ProcessRunner::new("/bin/bash").args(["-c", LINUX_PIPELINE]),
        Platform::Mac => ProcessRunner::new("/bin/bash").args(["-c", MAC_PIPELINE]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_pipeline_is_single_argument() {
        let line = command_for(Platform::Windows).command_line();
        assert!(line.starts_with("cmd /c sfc /scannow && DISM"));
        assert!(line.ends_with("netsh winsock reset"));
    }

    #[test]
    fn test_linux_uses_clamav() {
        let line = command_for(Platform::Linux).command_line();
        assert_eq!(
            line,
            "/bin/bash -c sudo apt-get update && sudo apt-get install clamav -y && \
             sudo freshclam && sudo clamscan -r /"
        );
    }

    #[test]
    fn test_mac_only_prints_advice() {
        let line = command_for(Platform::Mac).command_line();
        assert!(line.contains("No built-in AV scanner"));
    }
}
