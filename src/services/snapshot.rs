//! 导出快照构建器 - 业务能力层
//!
//! 把渲染后的结果视图变成可供文档渲染服务分页的静态快照：
//! 深拷贝节点树（绝不动交互视图）、摘除导出按钮、把剩余交互
//! 控件替换为静态文本（下拉控件取展示文案而不是提交值），
//! 再配上独立的 A4 分页样式表。

use tracing::debug;

use crate::form::store::ControlKind;
use crate::services::renderer::{ResultView, EXPORT_BUTTON_ID};
use crate::view::markup::write_document;
use crate::view::node::{remove_by_id, Element, ViewNode};

/// 导出快照：标记文本 + 分页样式表
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub markup: String,
    pub stylesheet: String,
}

/// 快照构建器
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// 从结果视图构建快照
    ///
    /// # 参数
    /// - `view`: 已渲染的结果视图（只读，不被修改）
    pub fn build(view: &ResultView) -> Snapshot {
        let mut nodes = view.sections.clone();

        // 导出按钮不属于文档内容
        remove_by_id(&mut nodes, EXPORT_BUTTON_ID);

        flatten_controls(&mut nodes);
        debug!("快照构建完成，共 {} 个顶层区块", nodes.len());

        Snapshot {
            markup: write_document(&nodes, "results-container"),
            stylesheet: PRINT_STYLESHEET.to_string(),
        }
    }
}

/// 把交互控件替换为静态文本节点
///
/// 下拉控件使用选中项的展示文案，其余控件使用当前值。
/// 文档渲染服务没有交互控件的概念。
fn flatten_controls(nodes: &mut [ViewNode]) {
    for node in nodes {
        match node {
            ViewNode::Control(control) => {
                let text = match control.kind {
                    ControlKind::Select => control
                        .selected_label()
                        .unwrap_or(control.value.as_str())
                        .to_string(),
                    _ => control.value.clone(),
                };
                *node = Element::new("span")
                    .with_class("value-display")
                    .text_child(text)
                    .into_node();
            }
            ViewNode::Element(element) => flatten_controls(&mut element.children),
            _ => {}
        }
    }
}

/// 独立的分页样式表
///
/// 屏幕样式假设弹性视口，与固定分页互不兼容，导出时整套替换。
const PRINT_STYLESHEET: &str = r#"
@page {
    size: A4;
    margin: 25mm 20mm;
    @top-center {
        content: "Beresfords Life-First Strategy";
        font-family: serif;
        font-size: 9pt;
        color: #666;
    }
    @bottom-center {
        content: counter(page);
        font-family: serif;
        font-size: 9pt;
        color: #666;
    }
}
body {
    font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
    line-height: 1.5;
    color: #333;
    background: #fff;
    font-size: 11pt;
}
h2 {
    color: #1a365d;
    border-bottom: 2px solid #1a365d;
    padding-bottom: 5px;
    margin: 30px 0 15px;
    font-size: 18pt;
    page-break-after: avoid;
}
h3 {
    color: #2c5282;
    font-size: 14pt;
    margin: 20px 0 10px;
    page-break-after: avoid;
}
.section-card {
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 20px;
    margin-bottom: 25px;
    background: #fff;
    page-break-inside: avoid;
}
#res_num1, #res_num2 {
    font-size: 24pt;
    font-weight: bold;
    margin: 10px 0;
}
#res_num1 { color: #2f855a; }
#res_num2 { color: #c53030; }
.bucket-card {
    border: 1px solid #cbd5e0;
    border-radius: 5px;
    padding: 15px;
    margin-bottom: 10px;
    background: #f7fafc;
}
.bucket-val { font-size: 16pt; font-weight: bold; }
.bucket-gap { color: #c53030; }
table {
    width: 100%;
    border-collapse: collapse;
    font-size: 8pt;
}
th, td {
    padding: 6px;
    border: 1px solid #eee;
    text-align: left;
    word-wrap: break-word;
    vertical-align: top;
}
thead { background: #f4f4f4; }
.five-attr-grid {
    display: table;
    width: 100%;
    table-layout: fixed;
    border-collapse: collapse;
    margin-bottom: 10px;
    font-size: 8pt;
}
.five-attr-grid .form-group {
    display: table-cell;
    padding: 4px;
    border: 1px solid #eee;
    word-wrap: break-word;
    vertical-align: top;
}
label {
    display: block;
    font-weight: bold;
    font-size: 7pt;
    color: #666;
    text-transform: uppercase;
    margin-bottom: 2px;
}
.value-display { font-size: 9pt; }
#res_assumptions {
    white-space: pre-wrap;
    word-wrap: break-word;
    font-family: "Courier New", Courier, monospace;
    font-size: 8pt;
    background: #f4f4f4;
    padding: 10px;
    border: 1px solid #ddd;
    border-radius: 4px;
    max-width: 100%;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::store::SelectOption;
    use crate::view::node::ControlNode;

    fn view_with_control() -> ResultView {
        let mut view = ResultView::new();
        view.sections.push(
            Element::new("div")
                .with_id("echo")
                .child(ViewNode::Control(ControlNode {
                    kind: ControlKind::Select,
                    id: Some("season".to_string()),
                    value: "Off-Peak".to_string(),
                    options: vec![
                        SelectOption::new("Peak", "Peak Season"),
                        SelectOption::new("Off-Peak", "Quiet Season"),
                    ],
                }))
                .child(ViewNode::Control(ControlNode {
                    kind: ControlKind::Number,
                    id: Some("amount".to_string()),
                    value: "50000".to_string(),
                    options: Vec::new(),
                }))
                .into_node(),
        );
        view
    }

    #[test]
    fn test_export_button_removed_from_snapshot() {
        let view = ResultView::new();
        let snapshot = SnapshotBuilder::build(&view);
        assert!(!snapshot.markup.contains(EXPORT_BUTTON_ID));
    }

    /// 下拉控件替换为展示文案，数值控件替换为当前值
    #[test]
    fn test_controls_become_static_text() {
        let view = view_with_control();
        let snapshot = SnapshotBuilder::build(&view);

        assert!(!snapshot.markup.contains("<select"));
        assert!(!snapshot.markup.contains("<input"));
        assert!(snapshot.markup.contains("Quiet Season"));
        assert!(!snapshot.markup.contains("Off-Peak"));
        assert!(snapshot.markup.contains("50000"));
    }

    /// 构建快照不改动交互视图
    #[test]
    fn test_build_does_not_mutate_view() {
        let view = view_with_control();
        let before = view.sections.len();
        let _ = SnapshotBuilder::build(&view);
        assert_eq!(view.sections.len(), before);
        assert!(crate::view::node::find_by_id(&view.sections, EXPORT_BUTTON_ID).is_some());
    }

    #[test]
    fn test_stylesheet_is_paginated() {
        let snapshot = SnapshotBuilder::build(&ResultView::new());
        assert!(snapshot.stylesheet.contains("@page"));
        assert!(snapshot.stylesheet.contains("size: A4"));
        assert!(snapshot.stylesheet.contains("Beresfords Life-First Strategy"));
    }
}
