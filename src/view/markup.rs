//! 视图节点到 HTML 的纯序列化
//!
//! 文档渲染服务只接受标记文本，这里把节点树写成转义后的 HTML。

use std::fmt::Write;

use crate::form::store::ControlKind;
use crate::view::node::{ControlNode, Table, ViewNode};

/// 把节点森林包装为完整 HTML 文档
///
/// # 参数
/// - `nodes`: 视图节点
/// - `container_class`: 最外层容器的 class
pub fn write_document(nodes: &[ViewNode], container_class: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n</head>\n<body>\n");
    let _ = write!(out, "<div class=\"{}\">\n", escape_attr(container_class));
    for node in nodes {
        write_node(&mut out, node);
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// 序列化单个节点
pub fn write_node(out: &mut String, node: &ViewNode) {
    match node {
        ViewNode::Text(text) => out.push_str(&escape_html(text)),
        ViewNode::Element(element) => {
            let _ = write!(out, "<{}", element.tag);
            if let Some(id) = &element.id {
                let _ = write!(out, " id=\"{}\"", escape_attr(id));
            }
            if let Some(class) = &element.class {
                let _ = write!(out, " class=\"{}\"", escape_attr(class));
            }
            out.push('>');
            for child in &element.children {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
        ViewNode::Table(table) => write_table(out, table),
        ViewNode::Control(control) => write_control(out, control),
    }
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str("<table><thead><tr>");
    for header in &table.headers {
        let _ = write!(out, "<th>{}</th>", escape_html(header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_control(out: &mut String, control: &ControlNode) {
    let id_attr = control
        .id
        .as_ref()
        .map(|id| format!(" id=\"{}\"", escape_attr(id)))
        .unwrap_or_default();

    match control.kind {
        ControlKind::Text => {
            let _ = write!(out, "<input type=\"text\"{} value=\"{}\">", id_attr, escape_attr(&control.value));
        }
        ControlKind::Number => {
            let _ = write!(out, "<input type=\"number\"{} value=\"{}\">", id_attr, escape_attr(&control.value));
        }
        ControlKind::TextArea => {
            let _ = write!(out, "<textarea{}>{}</textarea>", id_attr, escape_html(&control.value));
        }
        ControlKind::Select => {
            let _ = write!(out, "<select{}>", id_attr);
            for option in &control.options {
                let selected = if option.value == control.value { " selected" } else { "" };
                let _ = write!(
                    out,
                    "<option value=\"{}\"{}>{}</option>",
                    escape_attr(&option.value),
                    selected,
                    escape_html(&option.label)
                );
            }
            out.push_str("</select>");
        }
    }
}

/// HTML 文本转义
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// HTML 属性值转义
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
