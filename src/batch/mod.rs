//! # 批量转换引擎
//!
//! 提供输入收集、去重集合与并行转换能力。
//!
//! ## 功能
//! - 路径分类与扩展名过滤
//! - 三种输入方式统一去重
//! - 单文件任务的失败隔离
//! - 定宽线程池并行处理与结果汇总
//!
//! ## 依赖关系
//! - 被 `session.rs` 和 `commands/` 使用
//! - 使用 `walkdir` 遍历目录，`rayon` 进行并行处理

pub mod classifier;
pub mod collector;
pub mod job;
pub mod runner;
pub mod selection;

pub use classifier::AcceptedExtensions;
pub use collector::{AddOutcome, SourceAggregator};
pub use runner::{BatchConverter, DEFAULT_JOBS};
pub use selection::{ClearOutcome, SelectionSet};
