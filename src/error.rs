//! # 统一错误处理模块
//!
//! 定义 webpify 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分三类：
//! - 前置条件错误（`NoFiles` / `OutputDirNotFound` / `UnsupportedTargetFormat`），
//!   在任何任务派发之前中止整个批次
//! - 单文件错误（解码、编码、读写），只会折叠进该文件的 `ConversionOutcome::Failure`
//! - 输入解析错误（如质量值），在本地以默认值恢复，不会出现在这里
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// webpify 统一错误类型
#[derive(Error, Debug)]
pub enum WebpifyError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误
    // ─────────────────────────────────────────────────────────────
    #[error("No files selected. Select images first.")]
    NoFiles,

    #[error("The selected output folder no longer exists: {path}")]
    OutputDirNotFound { path: String },

    #[error("Target format '{format}' is not supported on this host")]
    UnsupportedTargetFormat { format: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path} ({source})")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path} ({source})")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("cannot decode image: {0}")]
    Decode(String),

    #[error("cannot encode WebP: {0}")]
    Encode(String),

    #[error("malformed WebP container: {0}")]
    Container(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{failed} file(s) failed to convert")]
    BatchFailed { failed: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WebpifyError>;
