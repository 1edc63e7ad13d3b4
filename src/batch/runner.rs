//! # 批量转换执行器
//!
//! 在固定宽度的线程池上并行执行转换任务，并汇总结果。
//!
//! ## 功能
//! - 运行前检查：输入非空、输出目录存在、目标格式可用
//! - 基于 rayon 的定宽线程池
//! - 单个任务失败不影响其他任务
//! - 成功/失败统计与失败详情汇总
//!
//! ## 依赖关系
//! - 被 `session.rs` 和 `commands/` 调用
//! - 使用 `batch/job.rs` 执行单个任务
//! - 使用 `rayon` 进行并行计算

use super::job::ConversionJob;
use crate::codec::Codec;
use crate::error::{Result, WebpifyError};
use crate::models::{BatchReport, ConversionOptions, ConversionOutcome};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 默认并行任务数
pub const DEFAULT_JOBS: usize = 4;

/// 批量转换执行器
pub struct BatchConverter<C> {
    codec: C,
    /// 并行作业数
    jobs: usize,
}

impl<C: Codec> BatchConverter<C> {
    /// 创建新的批量执行器，`jobs == 0` 时使用 CPU 核数
    pub fn new(codec: C, jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { codec, jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 运行前检查，任一不满足则整批中止
    pub fn check_preconditions(&self, files: &[PathBuf], output_dir: &Path) -> Result<()> {
        if files.is_empty() {
            return Err(WebpifyError::NoFiles);
        }

        if !output_dir.is_dir() {
            return Err(WebpifyError::OutputDirNotFound {
                path: output_dir.display().to_string(),
            });
        }

        if !self.codec.supports_target_format() {
            return Err(WebpifyError::UnsupportedTargetFormat {
                format: self.codec.format_name().to_string(),
            });
        }

        Ok(())
    }

    /// 并行转换文件列表
    ///
    /// 等待全部任务结束后返回；失败详情按输入顺序排列。
    pub fn run(
        &self,
        files: &[PathBuf],
        output_dir: &Path,
        options: &ConversionOptions,
    ) -> Result<BatchReport> {
        self.check_preconditions(files, output_dir)?;

        tracing::info!(
            "converting {} file(s) to {} in {} with {} worker(s)",
            files.len(),
            self.codec.format_name(),
            output_dir.display(),
            self.jobs
        );

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("webpify-worker-{}", i))
            .build()?;

        let outcomes: Vec<ConversionOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| ConversionJob::new(file, output_dir, options).run(&self.codec))
                .collect()
        });

        // 汇总结果
        let mut report = BatchReport::new(output_dir);
        for outcome in outcomes {
            report.merge(outcome);
        }

        tracing::info!(
            "batch {}: {} converted, {} failed",
            report.status(),
            report.success,
            report.failed
        );

        Ok(report)
    }
}
