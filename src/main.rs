//! # webpify - 批量图片转 WebP 工具
//!
//! 将 PNG/JPEG/WebP 图片批量转换为 WebP，支持显式选择文件、递归扫描目录、
//! 混合拖放，以及有损/无损与元数据控制。
//!
//! ## 子命令
//! - `convert` - 一次性批量转换
//! - `shell`   - 交互式会话（累积选择后转换）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── session.rs (会话上下文)
//!   │           ├── batch/   (收集、去重、并行转换)
//!   │           ├── codec/   (WebP 编码器)
//!   │           └── models/  (参数与结果模型)
//!   ├── utils/      (输出、日志、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod models;
mod session;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
