//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 将诊断日志写到 stderr，与 `utils/output.rs`
//! 的用户提示分开。
//!
//! 过滤规则取自环境变量 `WEBPIFY_LOG`（语法同 `RUST_LOG`），
//! 未设置时默认 `warn`，`--verbose` 时为 `debug`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "WEBPIFY_LOG";

/// 初始化全局日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(true)
        .try_init()
        .ok();
}
