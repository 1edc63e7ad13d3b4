//! # 批次报告展示
//!
//! 按 complete / partial / failed 三档输出批量转换结果。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 和 `commands/shell.rs` 使用
//! - 使用 `utils/output.rs` 和 `tabled`

use super::output;
use crate::models::{BatchReport, BatchStatus, FailureDetail};

use tabled::{Table, Tabled};

/// 部分成功时列出的失败条数
const PARTIAL_LISTED: usize = 10;
/// 全部失败时列出的失败条数
const FAILED_LISTED: usize = 15;

/// 失败详情行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 打印批次报告
pub fn print_report(report: &BatchReport) {
    output::print_separator();
    match report.status() {
        BatchStatus::Complete => {
            output::print_done(&format!(
                "Converted {} file(s) -> {}",
                report.success,
                report.output_dir.display()
            ));
        }
        BatchStatus::Partial => {
            output::print_warning(&format!(
                "Partial success: {} of {} converted, {} failed. Output: {}",
                report.success,
                report.total(),
                report.failed,
                report.output_dir.display()
            ));
            print_failures(report, PARTIAL_LISTED);
        }
        BatchStatus::Failed => {
            output::print_error("All failed: no files were converted.");
            print_failures(report, FAILED_LISTED);
        }
    }
}

fn print_failures(report: &BatchReport, limit: usize) {
    let rows = failure_rows(&report.failures, limit);
    if rows.is_empty() {
        return;
    }
    println!("{}", Table::new(&rows));

    let hidden = report.failed.saturating_sub(rows.len());
    if hidden > 0 {
        output::print_warning(&format!("  ... and {} more", hidden));
    }
}

fn failure_rows(failures: &[FailureDetail], limit: usize) -> Vec<FailureRow> {
    failures
        .iter()
        .take(limit)
        .map(|f| FailureRow {
            file: f.source_name.clone(),
            reason: f.reason.clone(),
        })
        .collect()
}
