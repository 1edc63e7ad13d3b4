//! # 会话上下文
//!
//! 一个会话持有一份待转换集合，界面层的每个事件都映射为这里的一个方法调用。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 和 `commands/shell.rs` 使用
//! - 使用 `batch/` 的收集器、集合与执行器

use crate::batch::{
    AcceptedExtensions, AddOutcome, BatchConverter, ClearOutcome, SelectionSet, SourceAggregator,
};
use crate::codec::Codec;
use crate::error::Result;
use crate::models::{BatchReport, ConversionOptions};

use std::path::{Path, PathBuf};

/// 删除操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// 没有指定任何路径
    NothingSelected,
    /// 实际删除的数量
    Removed(usize),
}

/// 转换会话
#[derive(Debug, Default)]
pub struct Session {
    selection: SelectionSet,
    aggregator: SourceAggregator,
}

impl Session {
    pub fn new(accepted: AcceptedExtensions) -> Self {
        Self {
            selection: SelectionSet::new(),
            aggregator: SourceAggregator::new(accepted),
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn accepted(&self) -> &AcceptedExtensions {
        self.aggregator.accepted()
    }

    pub fn on_files_picked(&mut self, paths: &[PathBuf]) -> AddOutcome {
        self.aggregator.from_explicit_list(&mut self.selection, paths)
    }

    pub fn on_folder_picked(&mut self, root: &Path) -> AddOutcome {
        self.aggregator.from_folder(&mut self.selection, root)
    }

    pub fn on_drop_payload(&mut self, items: &[PathBuf]) -> AddOutcome {
        self.aggregator.from_mixed_payload(&mut self.selection, items)
    }

    pub fn on_remove_selected(&mut self, paths: &[PathBuf]) -> RemoveOutcome {
        if paths.is_empty() {
            return RemoveOutcome::NothingSelected;
        }
        RemoveOutcome::Removed(self.selection.remove_many(paths))
    }

    pub fn on_clear_requested(&mut self) -> ClearOutcome {
        self.selection.clear()
    }

    /// 转换当前集合的快照；集合为空时使用 `fallback` 中的显式路径
    pub fn on_convert_requested<C: Codec>(
        &self,
        converter: &BatchConverter<C>,
        output_dir: &Path,
        options: &ConversionOptions,
        fallback: &[PathBuf],
    ) -> Result<BatchReport> {
        let snapshot = if self.selection.is_empty() {
            fallback.to_vec()
        } else {
            self.selection.snapshot()
        };
        converter.run(&snapshot, output_dir, options)
    }
}
