//! # 工具函数模块
//!
//! 提供美化输出、进度提示、报告展示与日志初始化。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 子模块: logging, output, progress, report

pub mod logging;
pub mod output;
pub mod progress;
pub mod report;
