//! # 数据模型模块
//!
//! 定义转换参数、单文件结果和批次报告。
//!
//! ## 依赖关系
//! - 被 `batch/`、`codec/` 和 `commands/` 使用
//! - 子模块: options, outcome

pub mod options;
pub mod outcome;

pub use options::{ConversionOptions, Encoding};
pub use outcome::{BatchReport, BatchStatus, ConversionOutcome, FailureDetail};
