//! # 路径分类
//!
//! 判断路径是目录还是可接受的图片文件。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 无外部模块依赖

use std::collections::BTreeSet;
use std::path::Path;

/// 默认可接受的输入扩展名
pub const DEFAULT_INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// 可接受的扩展名集合（统一小写，不含点）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedExtensions {
    extensions: BTreeSet<String>,
}

impl Default for AcceptedExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_EXTENSIONS)
    }
}

impl AcceptedExtensions {
    /// 创建扩展名集合，接受 `"png"` 或 `".PNG"` 形式
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// 扩展名是否在集合中（大小写不敏感）
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// 用于展示的扩展名列表
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// 路径是否为目录
///
/// 路径不存在或无法访问时返回 `false`，不向调用方传播错误。
pub fn is_directory(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// 路径扩展名是否可接受
pub fn is_accepted_file(path: &Path, accepted: &AcceptedExtensions) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| accepted.contains(e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_case_insensitive() {
        let accepted = AcceptedExtensions::default();
        assert!(is_accepted_file(Path::new("a/x.png"), &accepted));
        assert!(is_accepted_file(Path::new("a/z.JPEG"), &accepted));
        assert!(is_accepted_file(Path::new("y.Jpg"), &accepted));
        assert!(!is_accepted_file(Path::new("y.txt"), &accepted));
        assert!(!is_accepted_file(Path::new("png"), &accepted));
        assert!(!is_accepted_file(Path::new("archive.png.zip"), &accepted));
    }

    #[test]
    fn test_extension_normalization() {
        let accepted = AcceptedExtensions::new(&[".PNG", "Tiff", ""]);
        assert!(accepted.contains("png"));
        assert!(accepted.contains("TIFF"));
        assert_eq!(accepted.iter().collect::<Vec<_>>(), vec!["png", "tiff"]);
    }

    #[test]
    fn test_is_directory_missing_path() {
        assert!(!is_directory(Path::new("/definitely/not/here/at/all")));
    }

    #[test]
    fn test_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();

        assert!(is_directory(dir.path()));
        assert!(!is_directory(&file));
    }
}
