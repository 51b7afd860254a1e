//! 行实例与行工厂
//!
//! 一行是某个条目模式的一次活跃出现，字段值按录入原样存为字符串
//! （与表单控件的行为一致），提交时才做数值解析。

use std::collections::HashMap;

use crate::models::schema::{FieldKind, ItemKind};

/// 行实例
///
/// 不变式：模式里的每个字段都有值（缺省的已用建行默认值填充）
#[derive(Debug, Clone)]
pub struct RowInstance {
    kind: ItemKind,
    values: HashMap<&'static str, String>,
}

impl RowInstance {
    /// 获取条目类型
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// 读取字段值
    ///
    /// 模式外的 key 返回空串
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// 写入字段值（模式外的 key 被忽略）
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(def) = self.kind.field(key) {
            self.values.insert(def.key, value.into());
        }
    }
}

/// 创建行实例
///
/// 将 `initial` 按字段逐个覆盖到模式的建行默认值上，
/// 不要求提供全部字段。数值字段执行"解析否则回退"：
/// 提供值能解析成数字则采用，否则用模式默认值。
///
/// # 参数
/// - `kind`: 条目类型
/// - `initial`: 初始字段值（key, value 对）
pub fn create_row(kind: ItemKind, initial: &[(&str, &str)]) -> RowInstance {
    let supplied: HashMap<&str, &str> = initial.iter().copied().collect();

    let mut values = HashMap::new();
    for def in kind.fields() {
        let value = match supplied.get(def.key) {
            Some(raw) => match def.kind {
                FieldKind::Text => raw.to_string(),
                FieldKind::Numeric => {
                    if raw.trim().parse::<f64>().is_ok() {
                        raw.trim().to_string()
                    } else {
                        def.default.to_string()
                    }
                }
            },
            None => def.default.to_string(),
        };
        values.insert(def.key, value);
    }

    RowInstance { kind, values }
}
