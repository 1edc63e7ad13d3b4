//! # 单文件转换任务
//!
//! 一个任务 = (源文件, 输出目录, 参数)。任务内部的任何错误都折叠为
//! `ConversionOutcome::Failure`，不会影响同批次的其他任务。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `codec::Codec` 执行实际编码

use crate::codec::Codec;
use crate::models::{ConversionOptions, ConversionOutcome};

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// 单文件转换任务
#[derive(Debug, Clone, Copy)]
pub struct ConversionJob<'a> {
    pub source: &'a Path,
    pub output_dir: &'a Path,
    pub options: &'a ConversionOptions,
}

impl<'a> ConversionJob<'a> {
    pub fn new(source: &'a Path, output_dir: &'a Path, options: &'a ConversionOptions) -> Self {
        Self {
            source,
            output_dir,
            options,
        }
    }

    /// 输出路径：`输出目录/源文件名(不含扩展名).目标扩展名`
    pub fn destination(&self, extension: &str) -> PathBuf {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        self.output_dir.join(format!("{}.{}", stem, extension))
    }

    /// 执行转换
    pub fn run<C: Codec + ?Sized>(&self, codec: &C) -> ConversionOutcome {
        let destination = self.destination(codec.target_extension());
        tracing::debug!("converting {} -> {}", self.source.display(), destination.display());

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            codec.encode(self.source, &destination, self.options)
        }));

        let outcome = match result {
            Ok(Ok(written)) if written.exists() => ConversionOutcome::Success(written),
            Ok(Ok(_)) => ConversionOutcome::Failure(self.source.to_path_buf(), "output missing".to_string()),
            Ok(Err(e)) => ConversionOutcome::Failure(self.source.to_path_buf(), e.to_string()),
            Err(payload) => ConversionOutcome::Failure(self.source.to_path_buf(), panic_message(payload)),
        };

        if let ConversionOutcome::Failure(path, reason) = &outcome {
            tracing::warn!("failed to convert {}: {}", path.display(), reason);
        }
        outcome
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("codec panicked: {}", detail)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{Result, WebpifyError};
    use std::fs;

    /// 测试用编码器：复制源文件内容，可按文件名注入故障
    pub(crate) struct CopyCodec {
        pub supported: bool,
    }

    impl Codec for CopyCodec {
        fn format_name(&self) -> &str {
            "Copy"
        }

        fn target_extension(&self) -> &str {
            "webp"
        }

        fn supports_target_format(&self) -> bool {
            self.supported
        }

        fn encode(&self, source: &Path, destination: &Path, _: &ConversionOptions) -> Result<PathBuf> {
            let name = source.file_name().unwrap().to_string_lossy().to_string();
            if name.starts_with("panic") {
                panic!("decoder exploded");
            }
            let bytes = fs::read(source).map_err(|e| WebpifyError::FileReadError {
                path: source.display().to_string(),
                source: e,
            })?;
            if name.starts_with("ghost") {
                return Ok(destination.to_path_buf());
            }
            fs::write(destination, bytes).map_err(|e| WebpifyError::FileWriteError {
                path: destination.display().to_string(),
                source: e,
            })?;
            Ok(destination.to_path_buf())
        }
    }

    #[test]
    fn test_destination_uses_stem() {
        let opts = ConversionOptions::default();
        let job = ConversionJob::new(Path::new("/pics/a/holiday.photo.JPG"), Path::new("/out"), &opts);
        assert_eq!(job.destination("webp"), PathBuf::from("/out/holiday.photo.webp"));
    }

    #[test]
    fn test_success() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.png");
        fs::write(&src, b"pixels").unwrap();
        let opts = ConversionOptions::default();

        let outcome = ConversionJob::new(&src, dir.path(), &opts).run(&CopyCodec { supported: true });
        assert_eq!(outcome, ConversionOutcome::Success(dir.path().join("a.webp")));
    }

    #[test]
    fn test_missing_source_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("gone.png");
        let opts = ConversionOptions::default();

        let outcome = ConversionJob::new(&src, dir.path(), &opts).run(&CopyCodec { supported: true });
        match outcome {
            ConversionOutcome::Failure(path, reason) => {
                assert_eq!(path, src);
                assert!(reason.contains("Failed to read file"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_output_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ghost.png");
        fs::write(&src, b"pixels").unwrap();
        let opts = ConversionOptions::default();

        let outcome = ConversionJob::new(&src, dir.path(), &opts).run(&CopyCodec { supported: true });
        assert_eq!(outcome, ConversionOutcome::Failure(src, "output missing".to_string()));
    }

    #[test]
    fn test_codec_panic_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("panic.png");
        let opts = ConversionOptions::default();

        let outcome = ConversionJob::new(&src, dir.path(), &opts).run(&CopyCodec { supported: true });
        assert_eq!(
            outcome,
            ConversionOutcome::Failure(src, "codec panicked: decoder exploded".to_string())
        );
    }
}
