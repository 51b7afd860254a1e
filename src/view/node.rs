//! 声明式视图节点
//!
//! 结果视图用一棵小型节点树描述，渲染函数只产出节点树，
//! 序列化成 HTML 由 markup 模块负责。节点树是纯数据，
//! 便于在没有真实文档环境的情况下做测试。

use crate::form::store::{ControlKind, SelectOption};

/// 视图节点
#[derive(Debug, Clone)]
pub enum ViewNode {
    Element(Element),
    Text(String),
    /// 交互控件，导出快照时会被替换为静态文本
    Control(ControlNode),
    Table(Table),
}

impl ViewNode {
    pub fn text(content: impl Into<String>) -> Self {
        ViewNode::Text(content.into())
    }
}

/// 通用元素节点
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub class: Option<String>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            class: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn child(mut self, node: ViewNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text_child(self, content: impl Into<String>) -> Self {
        self.child(ViewNode::Text(content.into()))
    }

    pub fn into_node(self) -> ViewNode {
        ViewNode::Element(self)
    }
}

/// 表格节点
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// 控件节点
#[derive(Debug, Clone)]
pub struct ControlNode {
    pub kind: ControlKind,
    pub id: Option<String>,
    pub value: String,
    /// 仅下拉控件使用
    pub options: Vec<SelectOption>,
}

impl ControlNode {
    /// 当前选中项的展示文案（非下拉控件返回 None）
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.value == self.value)
            .map(|opt| opt.label.as_str())
    }
}

/// 在节点森林中按 id 查找元素（深度优先）
pub fn find_by_id_mut<'a>(nodes: &'a mut [ViewNode], id: &str) -> Option<&'a mut Element> {
    for node in nodes {
        if let ViewNode::Element(element) = node {
            if element.id.as_deref() == Some(id) {
                return Some(element);
            }
            if let Some(found) = find_by_id_mut(&mut element.children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// 只读版按 id 查找
pub fn find_by_id<'a>(nodes: &'a [ViewNode], id: &str) -> Option<&'a Element> {
    for node in nodes {
        if let ViewNode::Element(element) = node {
            if element.id.as_deref() == Some(id) {
                return Some(element);
            }
            if let Some(found) = find_by_id(&element.children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// 按 id 删除元素（含子树），返回是否删除了节点
pub fn remove_by_id(nodes: &mut Vec<ViewNode>, id: &str) -> bool {
    let before = nodes.len();
    nodes.retain(|node| match node {
        ViewNode::Element(element) => element.id.as_deref() != Some(id),
        _ => true,
    });
    if nodes.len() < before {
        return true;
    }
    for node in nodes {
        if let ViewNode::Element(element) = node {
            if remove_by_id(&mut element.children, id) {
                return true;
            }
        }
    }
    false
}
