//! # 扫描过滤器
//!
//! 按文件名后缀（扩展名）过滤扫描结果。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 由 `commands/organize.rs` 根据用户输入构造

use crate::error::{DeskmateError, Result};
use std::fmt;

/// 扩展名过滤器
///
/// 每个扩展名都已规范化为小写并以 `.` 开头；匹配时对整个文件名
/// （不含目录）做大小写不敏感的后缀比较。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    extensions: Vec<String>,
}

impl ScanFilter {
    /// 从逗号分隔的列表构造（例如 `"txt, .JPG,png"`）
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(list.split(','))
    }

    /// 从扩展名集合构造，空集合视为错误
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().to_lowercase();
            if ext.is_empty() || ext == "." {
                continue;
            }
            let ext = if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            };
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        if normalized.is_empty() {
            return Err(DeskmateError::EmptyExtensionList);
        }

        Ok(Self {
            extensions: normalized,
        })
    }

    /// 规范化后的扩展名
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// 检查文件名是否匹配任一扩展名
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}

impl fmt::Display for ScanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.extensions().join(", "))
    }
}
