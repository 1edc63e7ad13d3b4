//! # 转换结果模型
//!
//! 单文件转换结果与批次汇总报告。
//!
//! ## 依赖关系
//! - 被 `batch/job.rs`、`batch/runner.rs` 产生
//! - 被 `commands/` 和 `utils/report.rs` 消费

use std::fmt;
use std::path::{Path, PathBuf};

/// 报告中最多保留的失败详情数
pub const MAX_FAILURE_DETAILS: usize = 15;

/// 单个文件的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// 转换成功，携带输出路径
    Success(PathBuf),
    /// 转换失败：(源文件路径, 错误信息)
    Failure(PathBuf, String),
}

/// 一条失败描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    /// 源文件名（不含目录）
    pub source_name: String,
    pub reason: String,
}

impl FailureDetail {
    fn new(source: &Path, reason: String) -> Self {
        let source_name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| source.display().to_string());
        FailureDetail {
            source_name,
            reason,
        }
    }
}

impl fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source_name, self.reason)
    }
}

/// 批次整体结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// 全部成功
    Complete,
    /// 部分成功
    Partial,
    /// 全部失败
    Failed,
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::Complete => write!(f, "complete"),
            BatchStatus::Partial => write!(f, "partial"),
            BatchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// 批量转换汇总
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情（最多 [`MAX_FAILURE_DETAILS`] 条）
    pub failures: Vec<FailureDetail>,
    /// 输出目录
    pub output_dir: PathBuf,
}

impl BatchReport {
    pub fn new(output_dir: &Path) -> Self {
        BatchReport {
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        }
    }

    /// 合并单个结果
    pub fn merge(&mut self, outcome: ConversionOutcome) {
        match outcome {
            ConversionOutcome::Success(_) => self.success += 1,
            ConversionOutcome::Failure(path, reason) => {
                self.failed += 1;
                if self.failures.len() < MAX_FAILURE_DETAILS {
                    self.failures.push(FailureDetail::new(&path, reason));
                }
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 批次结论
    ///
    /// 报告只在至少派发了一个任务后产生，因此 `success == 0` 即全部失败。
    pub fn status(&self) -> BatchStatus {
        match (self.success, self.failed) {
            (_, 0) if self.success > 0 => BatchStatus::Complete,
            (0, _) => BatchStatus::Failed,
            _ => BatchStatus::Partial,
        }
    }
}
