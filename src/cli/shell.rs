//! # shell 子命令 CLI 定义
//!
//! 交互式会话的初始参数，可在会话内用 `set` 修改。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/shell.rs`

use super::{EncodeArgs, OutputArg};
use clap::Args;

/// shell 子命令参数
#[derive(Args, Debug)]
pub struct ShellArgs {
    #[command(flatten)]
    pub output: OutputArg,

    #[command(flatten)]
    pub encode: EncodeArgs,
}
