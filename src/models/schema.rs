//! 条目模式定义
//!
//! 每种可重复条目（车辆 / 五属性条目 / 人生阶段 / 障碍）对应一组字段定义。
//! 字段定义里的默认值是"建行默认值"——新建一行时未提供的字段用它填充；
//! 聚合提交时数值解析失败的回退常量另行定义在 Aggregator 里，
//! 两套常量按原始业务规则刻意不同，不要合并。

use serde::{Deserialize, Serialize};

/// 可重复条目的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// 车辆（带更换周期）
    Vehicle,
    /// 通用五属性条目（婚礼 / 首付 / 教育 / 度假屋等）
    FiveAttribute,
    /// 人生阶段（收入需求区间）
    Stage,
    /// 障碍（描述 + 影响百分比）
    Barrier,
}

impl ItemKind {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Vehicle => "vehicle",
            ItemKind::FiveAttribute => "five_attribute",
            ItemKind::Stage => "stage",
            ItemKind::Barrier => "barrier",
        }
    }

    /// 从名称解析条目类型
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vehicle" => Some(ItemKind::Vehicle),
            "five_attribute" => Some(ItemKind::FiveAttribute),
            "stage" => Some(ItemKind::Stage),
            "barrier" => Some(ItemKind::Barrier),
            _ => None,
        }
    }

    /// 获取该类型的字段定义表（按展示顺序）
    pub fn fields(self) -> &'static [FieldDef] {
        match self {
            ItemKind::Vehicle => VEHICLE_FIELDS,
            ItemKind::FiveAttribute => FIVE_ATTRIBUTE_FIELDS,
            ItemKind::Stage => STAGE_FIELDS,
            ItemKind::Barrier => BARRIER_FIELDS,
        }
    }

    /// 按 key 查找字段定义
    pub fn field(self, key: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.key == key)
    }
}

/// 字段取值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 自由文本
    Text,
    /// 数值（解析失败时回退）
    Numeric,
}

/// 单个字段定义
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// 字段 key（与请求文档中的 key 一致）
    pub key: &'static str,
    /// 取值类型
    pub kind: FieldKind,
    /// 建行默认值（空串表示留空，由用户填写）
    pub default: &'static str,
    /// 是否必填
    pub required: bool,
}

const VEHICLE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "name", kind: FieldKind::Text, default: "", required: true },
    FieldDef { key: "purchase_value", kind: FieldKind::Numeric, default: "", required: true },
    FieldDef { key: "start_age", kind: FieldKind::Numeric, default: "60", required: true },
    // 车辆持有成本默认 1500（牌照/保险），与通用五属性条目的 0 不同
    FieldDef { key: "holding_cost", kind: FieldKind::Numeric, default: "1500", required: false },
    FieldDef { key: "replacement_cycle", kind: FieldKind::Numeric, default: "5", required: false },
    FieldDef { key: "end_age", kind: FieldKind::Numeric, default: "80", required: true },
];

const FIVE_ATTRIBUTE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "name", kind: FieldKind::Text, default: "", required: true },
    FieldDef { key: "purchase_value", kind: FieldKind::Numeric, default: "", required: true },
    FieldDef { key: "purchase_timing", kind: FieldKind::Numeric, default: "0", required: true },
    FieldDef { key: "holding_cost", kind: FieldKind::Numeric, default: "0", required: false },
    FieldDef { key: "disposal_timing", kind: FieldKind::Numeric, default: "0", required: true },
    FieldDef { key: "disposal_value", kind: FieldKind::Numeric, default: "0", required: false },
];

const STAGE_FIELDS: &[FieldDef] = &[
    FieldDef { key: "name", kind: FieldKind::Text, default: "", required: true },
    FieldDef { key: "start_age", kind: FieldKind::Numeric, default: "60", required: true },
    FieldDef { key: "end_age", kind: FieldKind::Numeric, default: "75", required: true },
    FieldDef { key: "annual_income", kind: FieldKind::Numeric, default: "80000", required: true },
];

const BARRIER_FIELDS: &[FieldDef] = &[
    FieldDef { key: "description", kind: FieldKind::Text, default: "", required: true },
    FieldDef { key: "impact_percentage", kind: FieldKind::Numeric, default: "50", required: true },
];
