//! # WebP RIFF 容器处理
//!
//! libwebp 只输出像素数据，不写 EXIF。保留元数据时需要把简单格式
//! (`VP8 ` / `VP8L`) 升级为扩展格式 (`VP8X`) 并追加 `EXIF` 块。
//!
//! ## 依赖关系
//! - 被 `codec/webp_codec.rs` 使用
//! - 无外部模块依赖

use crate::error::{Result, WebpifyError};

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

const FLAG_EXIF: u8 = 0x08;
const FLAG_ALPHA: u8 = 0x10;

/// JPEG APP1 段中 EXIF 数据前的标识
const EXIF_APP1_PREFIX: &[u8] = b"Exif\0\0";

/// RIFF 块
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chunk<'a> {
    fourcc: [u8; 4],
    payload: &'a [u8],
}

/// 向 WebP 文件附加 EXIF 元数据
pub fn attach_exif(webp: &[u8], exif: &[u8], width: u32, height: u32, has_alpha: bool) -> Result<Vec<u8>> {
    let exif = exif.strip_prefix(EXIF_APP1_PREFIX).unwrap_or(exif);
    let chunks = parse_chunks(webp)?;

    let mut body = Vec::with_capacity(webp.len() + exif.len() + 32);
    body.extend_from_slice(b"WEBP");

    match chunks.first() {
        Some(first) if &first.fourcc == b"VP8X" => {
            if first.payload.len() < 10 {
                return Err(WebpifyError::Container("VP8X chunk too short".to_string()));
            }
            let mut header = first.payload.to_vec();
            header[0] |= FLAG_EXIF;
            write_chunk(&mut body, b"VP8X", &header);
        }
        _ => {
            let mut flags = FLAG_EXIF;
            if has_alpha {
                flags |= FLAG_ALPHA;
            }
            write_chunk(&mut body, b"VP8X", &vp8x_payload(flags, width, height)?);
        }
    }

    for chunk in chunks
        .iter()
        .filter(|c| &c.fourcc != b"VP8X" && &c.fourcc != b"EXIF")
    {
        write_chunk(&mut body, &chunk.fourcc, chunk.payload);
    }
    write_chunk(&mut body, b"EXIF", exif);

    let size = u32::try_from(body.len())
        .map_err(|_| WebpifyError::Container("file exceeds 4 GiB".to_string()))?;

    let mut out = Vec::with_capacity(body.len() + CHUNK_HEADER_LEN);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

fn vp8x_payload(flags: u8, width: u32, height: u32) -> Result<[u8; 10]> {
    if width == 0 || height == 0 || width > 1 << 24 || height > 1 << 24 {
        return Err(WebpifyError::Container(format!(
            "canvas size {}x{} out of range",
            width, height
        )));
    }

    let mut payload = [0u8; 10];
    payload[0] = flags;
    payload[4..7].copy_from_slice(&(width - 1).to_le_bytes()[..3]);
    payload[7..10].copy_from_slice(&(height - 1).to_le_bytes()[..3]);
    Ok(payload)
}

fn parse_chunks(data: &[u8]) -> Result<Vec<Chunk<'_>>> {
    if data.len() < RIFF_HEADER_LEN || &data[0..4] != b"RIFF" || &data[8..12] != b"WEBP" {
        return Err(WebpifyError::Container("missing RIFF/WEBP header".to_string()));
    }

    let mut chunks = Vec::new();
    let mut pos = RIFF_HEADER_LEN;

    while pos + CHUNK_HEADER_LEN <= data.len() {
        let fourcc = [data[pos], data[pos + 1], data[pos + 2], data[pos + 3]];
        let size = u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
            as usize;
        let start = pos + CHUNK_HEADER_LEN;
        let end = start
            .checked_add(size)
            .filter(|&end| end <= data.len())
            .ok_or_else(|| {
                WebpifyError::Container(format!(
                    "chunk '{}' overruns file",
                    String::from_utf8_lossy(&fourcc)
                ))
            })?;

        chunks.push(Chunk {
            fourcc,
            payload: &data[start..end],
        });
        // 块按偶数字节对齐
        pos = end + (size & 1);
    }

    if chunks.is_empty() {
        return Err(WebpifyError::Container("no image data".to_string()));
    }

    Ok(chunks)
}

fn write_chunk(out: &mut Vec<u8>, fourcc: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(fourcc);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
}
