//! # convert 命令实现
//!
//! 在一个会话内依次处理显式文件、目录扫描、拖放负载与排除项，然后批量转换。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `session.rs`, `batch/`, `codec/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use super::{convert_with_spinner, options_from_args, report_added, report_removed};
use crate::batch::{AcceptedExtensions, BatchConverter};
use crate::cli::convert::ConvertArgs;
use crate::codec::{Codec, WebpCodec};
use crate::error::{Result, WebpifyError};
use crate::models::BatchStatus;
use crate::session::Session;
use crate::utils::{output, report};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let codec = WebpCodec::new();
    output::print_header(&format!("Converting images to {}", codec.format_name()));

    let output_dir = args.output.output.clone().ok_or_else(|| {
        WebpifyError::InvalidArgument("an output folder is required (--output)".to_string())
    })?;

    let mut session = Session::new(AcceptedExtensions::default());

    if !args.files.is_empty() {
        report_added(session.on_files_picked(&args.files), "the command line");
    }

    for folder in &args.folder {
        report_added(
            session.on_folder_picked(folder),
            &format!("'{}'", folder.display()),
        );
    }

    if !args.drop.is_empty() {
        report_added(session.on_drop_payload(&args.drop), "dropped items");
    }

    if !args.exclude.is_empty() {
        report_removed(session.on_remove_selected(&args.exclude));
    }

    let options = options_from_args(&args.encode);
    let converter = BatchConverter::new(codec, args.encode.jobs);

    output::print_info(&format!(
        "{} file(s) selected, output: {}",
        session.selection().len(),
        output_dir.display()
    ));

    let report = convert_with_spinner(&session, &converter, &output_dir, &options)?;
    report::print_report(&report);

    if report.status() == BatchStatus::Failed {
        return Err(WebpifyError::BatchFailed {
            failed: report.failed,
        });
    }

    Ok(())
}
