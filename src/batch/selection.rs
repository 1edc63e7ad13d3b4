//! # 待转换文件集合
//!
//! 有序、无重复的输入路径集合，在一个会话内不断累积。
//!
//! ## 功能
//! - 按插入顺序保存路径（用于展示）
//! - 重复添加为空操作
//! - 删除不存在的路径为空操作
//! - 清空时告知调用方之前是否为空
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 和 `session.rs` 使用
//! - 使用 `indexmap` 保持插入顺序

use indexmap::IndexSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 清空操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// 清除了 n 个文件
    Cleared(usize),
    /// 集合原本为空
    AlreadyEmpty,
}

/// 待转换文件集合
///
/// 路径按原始文本比较，不做规范化：`dir/a.png` 与 `dir/./a.png` 是两个条目。
/// `PathBuf` 的相等性按路径组件计算，因此这里以 `OsString` 为键。
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    paths: IndexSet<OsString>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加单个路径，返回是否为新路径
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        self.paths.insert(path.into().into_os_string())
    }

    /// 批量添加，返回新增数量
    pub fn add_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut added = 0;
        for p in paths {
            if self.add(p) {
                added += 1;
            }
        }
        added
    }

    /// 批量删除，返回实际删除数量
    pub fn remove_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut removed = 0;
        for p in paths {
            if self.paths.shift_remove(p.as_ref().as_os_str()) {
                removed += 1;
            }
        }
        removed
    }

    /// 清空集合
    pub fn clear(&mut self) -> ClearOutcome {
        if self.paths.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }
        let n = self.paths.len();
        self.paths.clear();
        ClearOutcome::Cleared(n)
    }

    /// 当前内容的不可变快照
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.paths.iter().map(PathBuf::from).collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(Path::new)
    }
}
