//! 录入文件加载器
//!
//! 从 TOML 文件读取预填表单：`[fields]` 表写单例控件，
//! `[[lists.<容器名>]]` 表写动态列表的行。文件格式示例：
//!
//! ```toml
//! [fields]
//! p1_name = "Alex"
//! asset_super = 850000
//!
//! [[lists.carList]]
//! name = "Family Car"
//! purchase_value = 50000
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::form::FormStore;

/// 录入文件结构
#[derive(Debug, Default, Deserialize)]
pub struct IntakeFile {
    /// 单例控件的值（控件 id -> 值）
    #[serde(default)]
    pub fields: BTreeMap<String, toml::Value>,
    /// 动态列表的行（容器名 -> 行集合）
    #[serde(default)]
    pub lists: BTreeMap<String, Vec<BTreeMap<String, toml::Value>>>,
}

/// 加载录入文件并写入表单仓库
///
/// # 参数
/// - `path`: TOML 文件路径
/// - `store`: 目标表单仓库
pub async fn load_intake_file(path: impl AsRef<Path>, store: &mut FormStore) -> Result<()> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取录入文件失败: {}", path.display()))?;

    let intake: IntakeFile = toml::from_str(&content)
        .map_err(|e| AppError::intake_parse_failed(path.display().to_string(), e))?;

    apply_intake(&intake, store)?;

    info!(
        "✓ 已加载录入文件 {} ({} 个字段, {} 个列表)",
        path.display(),
        intake.fields.len(),
        intake.lists.len()
    );
    Ok(())
}

/// 将录入内容写入表单仓库
///
/// 列表容器必须已在仓库中登记，未知容器名视为集成错误
pub fn apply_intake(intake: &IntakeFile, store: &mut FormStore) -> Result<()> {
    for (id, value) in &intake.fields {
        store.set_value(id, value_to_string(value));
    }

    for (name, rows) in &intake.lists {
        let list = store
            .list_mut(name)
            .ok_or_else(|| AppError::MissingList { name: name.clone() })?;
        for row in rows {
            let pairs: Vec<(String, String)> = row
                .iter()
                .map(|(key, value)| (key.clone(), value_to_string(value)))
                .collect();
            let borrowed: Vec<(&str, &str)> = pairs
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            list.add(&borrowed);
        }
    }

    Ok(())
}

/// TOML 值转控件字符串值
fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
