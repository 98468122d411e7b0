//! # 统一错误处理模块
//!
//! 定义 DeskMate 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的复制/移动/删除失败不在此列：批处理按"尽力而为"策略
//! 跳过这些条目，只记录日志并计入 `BatchResult`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// DeskMate 统一错误类型
#[derive(Error, Debug)]
pub enum DeskmateError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to scan directory: {path}")]
    ScanFailed {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 缓存与权限
    // ─────────────────────────────────────────────────────────────
    #[error("{browser} cache folder not found!")]
    CacheFolderUnresolved { browser: String },

    #[error("Cache folder not found:\n{path}")]
    CacheFolderNotFound { path: String },

    #[error(
        "The Antivirus Check feature requires administrator/root privileges.\n\
         Please restart the application with elevated permissions and try again.\n\n\
         Windows: Right-click and 'Run as administrator'\n\
         Linux/Mac: Run using 'sudo' or as root user."
    )]
    PrivilegeRequired,

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command failed: {command} ({status})")]
    CommandFailed { command: String, status: String },

    #[error("External command '{command}' timed out after {seconds}s")]
    CommandTimedOut { command: String, seconds: u64 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No file extensions given (expected e.g. 'txt,jpg,png')")]
    EmptyExtensionList,

    // ─────────────────────────────────────────────────────────────
    // 后台任务
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start background task '{name}'")]
    WorkerSpawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Background task '{name}' panicked: {reason}")]
    WorkerPanicked { name: String, reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DeskmateError>;
