//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 一次性批量转换
//! - `shell`: 交互式会话（逐步添加/删除/清空后再转换）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, shell

pub mod convert;
pub mod shell;

use crate::batch::DEFAULT_JOBS;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// webpify - 批量转换图片为 WebP
#[derive(Parser)]
#[command(name = "webpify")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch-convert PNG/JPEG/WebP images to WebP", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logs to stderr (overridden by WEBPIFY_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert picked files and folders in one go
    Convert(convert::ConvertArgs),

    /// Start an interactive session to build up a selection before converting
    Shell(shell::ShellArgs),
}

/// 两个子命令共享的编码参数
#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Quality 0-100 for lossy encoding (invalid input falls back to 80)
    #[arg(short, long, env = "WEBPIFY_QUALITY", default_value = "80")]
    pub quality: String,

    /// Encode losslessly (quality is ignored)
    #[arg(long, default_value_t = false)]
    pub lossless: bool,

    /// Keep EXIF metadata instead of stripping it
    #[arg(long, default_value_t = false)]
    pub keep_metadata: bool,

    /// Number of parallel jobs (0 = one per CPU)
    #[arg(short, long, env = "WEBPIFY_JOBS", default_value_t = DEFAULT_JOBS)]
    pub jobs: usize,
}

/// 输出目录参数
#[derive(Args, Debug, Clone)]
pub struct OutputArg {
    /// Existing directory that receives the .webp files
    #[arg(short, long, env = "WEBPIFY_OUTPUT")]
    pub output: Option<PathBuf>,
}
