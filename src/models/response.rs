//! 响应文档结构
//!
//! 分析服务返回的结构化结果。capital_structure 与 resilience_report
//! 是可选子树，整体缺失时渲染必须照常完成。

use serde::{Deserialize, Serialize};

/// 分析响应文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub true_north: TrueNorth,
    /// 叙事性总结
    pub client_narrative: String,
    /// 全品类五属性条目的扁平台账，按返回顺序渲染
    pub lifeline_register: Vec<LifelineEntry>,
    /// 资本需求拆解（仅回传，不参与渲染）
    #[serde(default)]
    pub capital_requirements: Vec<CapitalRequirement>,
    pub two_numbers: TwoNumbers,
    /// 三桶资本结构（可选子树）
    #[serde(default)]
    pub capital_structure: Option<BucketStructure>,
    /// 韧性报告（可选子树）
    #[serde(default)]
    pub resilience_report: Option<ResilienceReport>,
    pub fee_relativity: FeeRelativity,
    /// 假设回显，自由键值结构
    #[serde(default)]
    pub assumptions_log: serde_json::Value,
}

/// True North：头部愿望与回避
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrueNorth {
    pub top_3_wants: Vec<String>,
    pub top_3_dont_wants: Vec<String>,
    #[serde(default)]
    pub true_north_statement: String,
}

/// 两个核心资本数字与缺口叙事
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoNumbers {
    pub necessary_life_capital: f64,
    pub best_life_capital: f64,
    pub gap_analysis: String,
}

/// 台账条目
///
/// 时点字段是自由文本（可能是年龄也可能是年份），原样展示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifelineEntry {
    pub item_name: String,
    pub category: String,
    pub purchase_value: f64,
    pub purchase_timing: String,
    pub holding_cost: f64,
    pub disposal_timing: String,
    pub disposal_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalRequirement {
    pub category: String,
    pub lump_sum_required: f64,
    pub details: String,
}

/// 单个资本桶：目标 / 已配置 / 缺口
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketDetail {
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default)]
    pub purpose: String,
    pub target_amount: f64,
    pub funded_amount: f64,
    pub gap: f64,
}

/// 三桶资本结构（稳定 / 动能 / 增长）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketStructure {
    pub bucket_1: BucketDetail,
    pub bucket_2: BucketDetail,
    pub bucket_3: BucketDetail,
    #[serde(default)]
    pub explanation: String,
}

/// 韧性报告：四段叙事
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResilienceReport {
    pub market_shock_response: String,
    pub health_event_response: String,
    pub early_death_implication: String,
    pub longevity_check: String,
}

/// 费用相对性：两个数字加一段叙事
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRelativity {
    pub total_estimated_fees_10y: f64,
    pub total_life_funded_value: f64,
    pub fee_ratio_narrative: String,
}
