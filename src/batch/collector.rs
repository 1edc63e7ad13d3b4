//! # 输入收集器
//!
//! 将三种输入方式统一为去重后的候选文件列表，并加入待转换集合。
//!
//! ## 功能
//! - 显式文件列表（原样加入，不过滤）
//! - 目录递归扫描（按扩展名过滤）
//! - 拖放混合负载（文件与目录混合）
//!
//! ## 依赖关系
//! - 被 `session.rs` 调用
//! - 使用 `batch/classifier.rs` 判断路径类型
//! - 使用 `walkdir` 遍历目录

use super::classifier::{self, AcceptedExtensions};
use super::selection::SelectionSet;

use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 添加操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// `added` 个新文件，`duplicates` 个已在集合中
    Added { added: usize, duplicates: usize },
    /// 目录中没有可接受的文件
    EmptyScan,
}

/// 输入收集器
#[derive(Debug, Clone, Default)]
pub struct SourceAggregator {
    /// 可接受的扩展名
    accepted: AcceptedExtensions,
}

impl SourceAggregator {
    /// 创建新的收集器
    pub fn new(accepted: AcceptedExtensions) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> &AcceptedExtensions {
        &self.accepted
    }

    /// 加入用户显式选择的文件
    pub fn from_explicit_list(&self, selection: &mut SelectionSet, paths: &[PathBuf]) -> AddOutcome {
        add_candidates(selection, paths.iter().cloned())
    }

    /// 递归扫描目录并加入匹配文件
    pub fn from_folder(&self, selection: &mut SelectionSet, root: &Path) -> AddOutcome {
        let found = self.scan_folder(root);
        if found.is_empty() {
            tracing::debug!("no accepted files under {}", root.display());
            return AddOutcome::EmptyScan;
        }
        add_candidates(selection, found)
    }

    /// 加入拖放的文件与目录
    pub fn from_mixed_payload(&self, selection: &mut SelectionSet, items: &[PathBuf]) -> AddOutcome {
        add_candidates(selection, self.expand_payload(items))
    }

    /// 收集目录下所有深度的匹配文件
    pub fn scan_folder(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
            .filter(|e| classifier::is_accepted_file(e.path(), &self.accepted))
            .map(|e| e.into_path())
            .collect()
    }

    /// 展开混合负载：先是直接给出的文件，再是各目录的扫描结果
    pub fn expand_payload(&self, items: &[PathBuf]) -> Vec<PathBuf> {
        let (folders, files): (Vec<&PathBuf>, Vec<&PathBuf>) =
            items.iter().partition(|p| classifier::is_directory(p));

        let mut candidates: IndexSet<PathBuf> = files
            .into_iter()
            .filter(|p| classifier::is_accepted_file(p, &self.accepted))
            .cloned()
            .collect();

        for folder in folders {
            candidates.extend(self.scan_folder(folder));
        }

        candidates.into_iter().collect()
    }
}

/// 所有入口共用的去重添加
fn add_candidates<I>(selection: &mut SelectionSet, candidates: I) -> AddOutcome
where
    I: IntoIterator<Item = PathBuf>,
{
    let candidates: Vec<PathBuf> = candidates.into_iter().collect();
    let total = candidates.len();
    let added = selection.add_many(candidates);
    tracing::debug!("added {} of {} candidate file(s)", added, total);
    AddOutcome::Added {
        added,
        duplicates: total - added,
    }
}
