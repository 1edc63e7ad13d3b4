//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，并把会话事件的结果转换为终端提示。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `session.rs`, `batch/`, `codec/`, `utils/`
//! - 子模块: convert, shell

pub mod convert;
pub mod shell;

use crate::batch::{AddOutcome, BatchConverter, ClearOutcome};
use crate::cli::{Commands, EncodeArgs};
use crate::codec::Codec;
use crate::error::Result;
use crate::models::{BatchReport, ConversionOptions};
use crate::session::{RemoveOutcome, Session};
use crate::utils::{output, progress};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Shell(args) => shell::execute(args),
    }
}

/// 由命令行参数构造转换参数
fn options_from_args(args: &EncodeArgs) -> ConversionOptions {
    let options = ConversionOptions::from_inputs(&args.quality, args.lossless, !args.keep_metadata);
    let in_range = args.quality.trim().parse::<u8>().map_or(false, |q| q <= 100);
    if !args.lossless && !in_range {
        output::print_warning(&format!(
            "Quality '{}' is not an integer in 0-100, using {}",
            args.quality, options.quality
        ));
    }
    options
}

/// 打印添加结果
fn report_added(outcome: AddOutcome, source: &str) {
    match outcome {
        AddOutcome::Added { added, duplicates } => {
            let mut msg = format!("Added {} file(s) from {}", added, source);
            if duplicates > 0 {
                msg.push_str(&format!(" ({} already selected)", duplicates));
            }
            output::print_info(&msg);
        }
        AddOutcome::EmptyScan => {
            output::print_warning(&format!("No images found in {}", source));
        }
    }
}

/// 打印删除结果
fn report_removed(outcome: RemoveOutcome) {
    match outcome {
        RemoveOutcome::NothingSelected => output::print_warning("Select one or more items first."),
        RemoveOutcome::Removed(n) => output::print_info(&format!("Removed {} file(s)", n)),
    }
}

/// 打印清空结果
fn report_cleared(outcome: ClearOutcome) {
    match outcome {
        ClearOutcome::Cleared(n) => {
            output::print_success(&format!("All {} file(s) have been removed.", n))
        }
        ClearOutcome::AlreadyEmpty => output::print_warning("There are no files to clear."),
    }
}

/// 带 spinner 执行一次转换
fn convert_with_spinner<C: Codec>(
    session: &Session,
    converter: &BatchConverter<C>,
    output_dir: &Path,
    options: &ConversionOptions,
) -> Result<BatchReport> {
    let spinner = progress::create_spinner(&format!(
        "Converting {} file(s) with {} worker(s)...",
        session.selection().len(),
        converter.jobs()
    ));
    let result = session.on_convert_requested(converter, output_dir, options, &[]);
    spinner.finish_and_clear();
    result
}
