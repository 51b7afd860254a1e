//! 动态列表控制器
//!
//! 每个具名列表一个控制器，独占管理行的增删生命周期。
//! 不变式：
//! - 列表长度只通过 add / remove 改变
//! - 顺序是插入顺序，删除不会重排幸存的行
//! - 删除是单向终态操作，没有撤销

use tracing::debug;

use crate::form::row::{create_row, RowInstance};
use crate::models::schema::ItemKind;

/// 行标识
///
/// 行被删除后其标识不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// 动态列表控制器
#[derive(Debug)]
pub struct ListController {
    name: String,
    kind: ItemKind,
    next_id: u64,
    rows: Vec<(RowId, RowInstance)>,
}

impl ListController {
    /// 创建空列表
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            next_id: 0,
            rows: Vec::new(),
        }
    }

    /// 列表名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 条目类型
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// 追加一行
    ///
    /// # 参数
    /// - `initial`: 初始字段值，未提供的字段用建行默认值填充
    ///
    /// # 返回
    /// 返回新行的标识
    pub fn add(&mut self, initial: &[(&str, &str)]) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push((id, create_row(self.kind, initial)));
        debug!("列表 {} 追加行 {:?}，当前 {} 行", self.name, id, self.rows.len());
        id
    }

    /// 删除指定行
    ///
    /// 不影响其余行的顺序与标识
    ///
    /// # 返回
    /// 该行存在并被删除时返回 true
    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|(row_id, _)| *row_id != id);
        let removed = self.rows.len() < before;
        if removed {
            debug!("列表 {} 删除行 {:?}，剩余 {} 行", self.name, id, self.rows.len());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按插入顺序遍历行
    pub fn rows(&self) -> impl Iterator<Item = &RowInstance> {
        self.rows.iter().map(|(_, row)| row)
    }

    /// 按标识获取可变行
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut RowInstance> {
        self.rows
            .iter_mut()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, row)| row)
    }
}
