//! # 顺序命名与传输动作
//!
//! `NamingPattern` 生成 `前缀 + 两位序号 + 原扩展名` 形式的目标文件名，
//! `TransferAction` 决定源文件是保留（复制）还是移除（移动）。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用

use std::fmt;

/// 前缀为空时使用的默认前缀
pub const DEFAULT_PREFIX: &str = "DeskMate_";

/// 传输动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAction {
    /// 复制到新名称（覆盖已存在的目标），源文件保留
    Copy,
    /// 移动到新名称（覆盖已存在的目标），成功后源文件被移除
    Move,
}

impl TransferAction {
    /// 面向用户的动作名称
    pub fn label(&self) -> &'static str {
        match self {
            TransferAction::Copy => "Rename",
            TransferAction::Move => "Move",
        }
    }
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 顺序命名模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPattern {
    prefix: String,
}

impl NamingPattern {
    /// 创建命名模式；去除首尾空白后为空则回退到默认前缀
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim();
        let prefix = if prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            prefix
        };
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 生成第 `sequence` 个文件（从 1 开始）的目标文件名
    ///
    /// 序号至少两位，超过 99 后自然增长。
    pub fn file_name(&self, sequence: usize, extension: &str) -> String {
        format!("{}{:02}{}", self.prefix, sequence, extension)
    }
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// 取文件名最后一个 `.` 起的部分（含 `.`），没有则为空串
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_padding() {
        let naming = NamingPattern::new("Doc_");
        assert_eq!(naming.file_name(1, ".txt"), "Doc_01.txt");
        assert_eq!(naming.file_name(42, ".JPG"), "Doc_42.JPG");
        assert_eq!(naming.file_name(100, ".txt"), "Doc_100.txt");
        assert_eq!(naming.file_name(7, ""), "Doc_07");
    }

    #[test]
    fn test_blank_prefix_falls_back_to_default() {
        assert_eq!(NamingPattern::new("   ").prefix(), DEFAULT_PREFIX);
        assert_eq!(NamingPattern::new(" Img_ ").prefix(), "Img_");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.TXT"), ".TXT");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), ".bashrc");
    }
}
