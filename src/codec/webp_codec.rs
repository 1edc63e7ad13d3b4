//! # WebP 编码器
//!
//! 使用 `image` 解码源文件，使用 libwebp（`webp` crate）编码。
//!
//! ## 功能
//! - 有损/无损编码，固定压缩力度
//! - 可选保留源文件 EXIF
//!
//! ## 依赖关系
//! - 实现 `codec::Codec`
//! - 使用 `codec/riff.rs` 嵌入 EXIF

use super::{riff, Codec};
use crate::error::{Result, WebpifyError};
use crate::models::{ConversionOptions, Encoding};

use image::{DynamicImage, ImageDecoder, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// libwebp 编码器
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        WebpCodec
    }

    /// 解码源文件，按需读取 EXIF
    fn decode(&self, source: &Path, keep_exif: bool) -> Result<(DynamicImage, Option<Vec<u8>>)> {
        let read_error = |e| WebpifyError::FileReadError {
            path: source.display().to_string(),
            source: e,
        };

        let reader = ImageReader::open(source)
            .map_err(read_error)?
            .with_guessed_format()
            .map_err(read_error)?;

        let mut decoder = reader
            .into_decoder()
            .map_err(|e| WebpifyError::Decode(e.to_string()))?;

        let exif = if keep_exif {
            // 读不到元数据不影响转换本身
            decoder.exif_metadata().ok().flatten()
        } else {
            None
        };

        let image =
            DynamicImage::from_decoder(decoder).map_err(|e| WebpifyError::Decode(e.to_string()))?;

        Ok((image, exif))
    }
}

impl Codec for WebpCodec {
    fn format_name(&self) -> &str {
        "WebP"
    }

    fn target_extension(&self) -> &str {
        "webp"
    }

    fn supports_target_format(&self) -> bool {
        ::webp::WebPConfig::new().is_ok()
    }

    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        options: &ConversionOptions,
    ) -> Result<PathBuf> {
        let (image, exif) = self.decode(source, !options.strip_metadata)?;

        // libwebp 只接受 8 位 RGB/RGBA
        let has_alpha = image.color().has_alpha();
        let pixels = if has_alpha {
            DynamicImage::ImageRgba8(image.to_rgba8())
        } else {
            DynamicImage::ImageRgb8(image.to_rgb8())
        };

        let encoder = ::webp::Encoder::from_image(&pixels)
            .map_err(|e| WebpifyError::Encode(e.to_string()))?;

        let mut config = ::webp::WebPConfig::new()
            .map_err(|_| WebpifyError::Encode("libwebp config unavailable".to_string()))?;
        config.method = options.effort();
        match options.encoding() {
            Encoding::Lossless => config.lossless = 1,
            Encoding::Lossy { quality } => {
                config.lossless = 0;
                config.quality = f32::from(quality);
            }
        }

        let memory = encoder
            .encode_advanced(&config)
            .map_err(|e| WebpifyError::Encode(format!("{:?}", e)))?;

        let bytes = match exif {
            Some(exif) if !exif.is_empty() => {
                riff::attach_exif(&memory, &exif, pixels.width(), pixels.height(), has_alpha)?
            }
            _ => memory.to_vec(),
        };

        fs::write(destination, bytes).map_err(|e| WebpifyError::FileWriteError {
            path: destination.display().to_string(),
            source: e,
        })?;

        tracing::debug!(
            "encoded {} -> {} ({:?})",
            source.display(),
            destination.display(),
            options.encoding()
        );

        Ok(destination.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn write_png(path: &Path, w: u32, h: u32) {
        image::RgbImage::from_fn(w, h, |x, y| image::Rgb([(x * 20) as u8, (y * 20) as u8, 128]))
            .save(path)
            .unwrap();
    }

    /// 生成带 APP1 Exif 段的 JPEG（小端 TIFF，空 IFD0）
    fn write_exif_jpeg(path: &Path, w: u32, h: u32) {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(w, h, image::Rgb([200, 90, 40])));
        let mut jpeg = std::io::Cursor::new(Vec::new());
        img.write_to(&mut jpeg, image::ImageFormat::Jpeg).unwrap();
        let jpeg = jpeg.into_inner();

        let mut payload = b"Exif\0\0".to_vec();
        payload.extend_from_slice(b"II*\0");
        payload.extend_from_slice(&8u32.to_le_bytes());
        payload.extend_from_slice(&0u16.to_le_bytes());
        payload.extend_from_slice(&0u32.to_le_bytes());

        let mut bytes = jpeg[..2].to_vec();
        bytes.extend_from_slice(&[0xFF, 0xE1]);
        bytes.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
        bytes.extend_from_slice(&payload);
        bytes.extend_from_slice(&jpeg[2..]);
        fs::write(path, bytes).unwrap();
    }

    /// 顶层 RIFF 块: (fourcc, payload)
    fn chunks(data: &[u8]) -> Vec<(String, Vec<u8>)> {
        let mut out = Vec::new();
        let mut pos = 12;
        while pos + 8 <= data.len() {
            let size = u32::from_le_bytes(data[pos + 4..pos + 8].try_into().unwrap()) as usize;
            let fourcc = String::from_utf8_lossy(&data[pos..pos + 4]).to_string();
            out.push((fourcc, data[pos + 8..pos + 8 + size].to_vec()));
            pos += 8 + size + (size & 1);
        }
        out
    }

    #[test]
    fn test_supports_webp() {
        assert!(WebpCodec::new().supports_target_format());
        assert_eq!(WebpCodec::new().target_extension(), "webp");
    }

    #[test]
    fn test_encode_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("photo.png");
        let dst = dir.path().join("photo.webp");
        write_png(&src, 12, 8);

        let opts = ConversionOptions::from_inputs("45", false, true);
        let written = WebpCodec::new().encode(&src, &dst, &opts).unwrap();

        assert_eq!(written, dst);
        let bytes = fs::read(&dst).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        assert_eq!(image::open(&dst).unwrap().dimensions(), (12, 8));
    }

    #[test]
    fn test_encode_lossless_roundtrips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("icon.png");
        let dst = dir.path().join("icon.webp");
        write_png(&src, 6, 6);

        let opts = ConversionOptions::from_inputs("10", true, true);
        WebpCodec::new().encode(&src, &dst, &opts).unwrap();

        let original = image::open(&src).unwrap().to_rgb8();
        let decoded = image::open(&dst).unwrap().to_rgb8();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_encode_rgba_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("alpha.png");
        let dst = dir.path().join("alpha.webp");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 100]))
            .save(&src)
            .unwrap();

        let opts = ConversionOptions::from_inputs("80", false, false);
        WebpCodec::new().encode(&src, &dst, &opts).unwrap();
        assert!(image::open(&dst).unwrap().color().has_alpha());
    }

    #[test]
    fn test_exif_kept_only_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("camera.jpg");
        write_exif_jpeg(&src, 8, 8);

        let kept = dir.path().join("kept.webp");
        let opts = ConversionOptions::from_inputs("80", false, false);
        WebpCodec::new().encode(&src, &kept, &opts).unwrap();

        let bytes = fs::read(&kept).unwrap();
        let found = chunks(&bytes);
        assert_eq!(found[0].0, "VP8X");
        let exif = found.iter().find(|(id, _)| id == "EXIF").expect("EXIF chunk");
        assert!(exif.1.starts_with(b"II*\0"));
        assert_eq!(image::open(&kept).unwrap().dimensions(), (8, 8));

        let stripped = dir.path().join("stripped.webp");
        let opts = ConversionOptions::from_inputs("80", false, true);
        WebpCodec::new().encode(&src, &stripped, &opts).unwrap();

        let bytes = fs::read(&stripped).unwrap();
        assert!(chunks(&bytes).iter().all(|(id, _)| id != "EXIF"));
        assert_eq!(image::open(&stripped).unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn test_corrupt_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("broken.png");
        fs::write(&src, b"definitely not a png").unwrap();

        let result = WebpCodec::new().encode(&src, &dir.path().join("broken.webp"), &ConversionOptions::default());
        assert!(matches!(result, Err(WebpifyError::Decode(_))));
        assert!(!dir.path().join("broken.webp").exists());
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = WebpCodec::new().encode(
            &dir.path().join("nope.png"),
            &dir.path().join("nope.webp"),
            &ConversionOptions::default(),
        );
        assert!(matches!(result, Err(WebpifyError::FileReadError { .. })));
    }
}
