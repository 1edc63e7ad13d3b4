//! # convert 子命令 CLI 定义
//!
//! 一次性收集输入并批量转换为 WebP。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::{EncodeArgs, OutputArg};
use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image files to convert, added as given
    pub files: Vec<PathBuf>,

    /// Folder to scan recursively for images (repeatable)
    #[arg(short, long)]
    pub folder: Vec<PathBuf>,

    /// Mixed files and folders, filtered by extension (repeatable)
    #[arg(short, long)]
    pub drop: Vec<PathBuf>,

    /// Remove these paths from the selection before converting (repeatable)
    #[arg(short = 'x', long)]
    pub exclude: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArg,

    #[command(flatten)]
    pub encode: EncodeArgs,
}
