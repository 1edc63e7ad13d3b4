//! # 编解码模块
//!
//! 批量转换引擎通过 [`Codec`] trait 调用外部编解码器，不关心像素层面的细节。
//!
//! ## 依赖关系
//! - 被 `batch/job.rs` 和 `batch/runner.rs` 使用
//! - 使用 `models/options.rs` 的转换参数
//! - 子模块: webp_codec（默认实现）, riff（WebP 容器处理）

pub mod riff;
pub mod webp_codec;

use crate::error::Result;
use crate::models::ConversionOptions;
use std::path::{Path, PathBuf};

pub use webp_codec::WebpCodec;

/// 目标格式编码器
pub trait Codec: Send + Sync {
    /// 目标格式名称（用于提示）
    fn format_name(&self) -> &str;

    /// 输出文件扩展名（不含点）
    fn target_extension(&self) -> &str;

    /// 当前环境是否支持目标格式
    fn supports_target_format(&self) -> bool;

    /// 将 `source` 转换后写入 `destination`，返回实际写入的路径
    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        options: &ConversionOptions,
    ) -> Result<PathBuf>;
}
