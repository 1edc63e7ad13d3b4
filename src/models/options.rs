//! # 转换参数模型
//!
//! 定义一次批量转换共享的编码参数。
//!
//! ## 依赖关系
//! - 被 `batch/job.rs`、`codec/` 和 `commands/` 使用
//! - 无外部模块依赖

/// 默认有损质量
pub const DEFAULT_QUALITY: u8 = 80;

/// 固定的压缩力度（libwebp `method`，0-6）
pub const EFFORT: i32 = 3;

/// 编码方式
///
/// 无损模式不携带质量值：质量只对有损编码有意义。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Lossy { quality: u8 },
    Lossless,
}

/// 转换参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// 用户输入的质量（0-100），仅在有损模式下生效
    pub quality: u8,
    /// 是否无损
    pub lossless: bool,
    /// 是否去除 EXIF 等元数据
    pub strip_metadata: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            quality: DEFAULT_QUALITY,
            lossless: false,
            strip_metadata: true,
        }
    }
}

impl ConversionOptions {
    /// 从界面输入构造参数，质量文本无法解析时回退到默认值
    pub fn from_inputs(quality: &str, lossless: bool, strip_metadata: bool) -> Self {
        ConversionOptions {
            quality: parse_quality(quality),
            lossless,
            strip_metadata,
        }
    }

    /// 实际传给编码器的编码方式
    pub fn encoding(&self) -> Encoding {
        if self.lossless {
            Encoding::Lossless
        } else {
            Encoding::Lossy {
                quality: self.quality,
            }
        }
    }

    /// 压缩力度
    pub fn effort(&self) -> i32 {
        EFFORT
    }
}

/// 解析质量输入
///
/// 非整数文本回退到 [`DEFAULT_QUALITY`]；整数被限制到 0-100。
pub fn parse_quality(input: &str) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(q) => q.clamp(0, 100) as u8,
        Err(_) => DEFAULT_QUALITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quality_fallback() {
        assert_eq!(parse_quality("abc"), 80);
        assert_eq!(parse_quality(""), 80);
        assert_eq!(parse_quality("4.5"), 80);
    }

    #[test]
    fn test_parse_quality_valid() {
        assert_eq!(parse_quality("45"), 45);
        assert_eq!(parse_quality(" 100 "), 100);
        assert_eq!(parse_quality("0"), 0);
    }

    #[test]
    fn test_parse_quality_clamped() {
        assert_eq!(parse_quality("150"), 100);
        assert_eq!(parse_quality("-5"), 0);
    }

    #[test]
    fn test_lossless_ignores_quality() {
        let opts = ConversionOptions::from_inputs("45", true, true);
        assert_eq!(opts.encoding(), Encoding::Lossless);

        let opts = ConversionOptions::from_inputs("abc", true, false);
        assert_eq!(opts.encoding(), Encoding::Lossless);
    }

    #[test]
    fn test_lossy_uses_quality() {
        let opts = ConversionOptions::from_inputs("45", false, true);
        assert_eq!(opts.encoding(), Encoding::Lossy { quality: 45 });

        let opts = ConversionOptions::from_inputs("abc", false, true);
        assert_eq!(opts.encoding(), Encoding::Lossy { quality: 80 });
    }

    #[test]
    fn test_default_options() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.quality, DEFAULT_QUALITY);
        assert!(!opts.lossless);
        assert!(opts.strip_metadata);
        assert_eq!(opts.effort(), 3);
    }
}
