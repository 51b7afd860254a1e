//! 请求文档结构
//!
//! 分析服务期望的规范化嵌套结构，顶层固定六个分区：
//! profile / context / big_rocks / lifestyle / family / assumptions。
//! 字段名与嵌套层级必须与服务端 schema 逐一对应，不要改名。

use serde::{Deserialize, Serialize};

/// 分析请求文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub profile: ClientProfile,
    pub context: FinancialContext,
    pub big_rocks: BigRocks,
    pub lifestyle: Lifestyle,
    pub family: FamilyLegacy,
    pub assumptions: Assumptions,
}

/// 客户档案与 True North（愿望 / 回避 / 障碍 / 悼词）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub partner1_name: String,
    pub partner1_dob: String,
    pub partner2_name: Option<String>,
    pub partner2_dob: Option<String>,
    pub partner1_retirement_age: i64,
    pub partner2_retirement_age: i64,
    pub wants: Vec<String>,
    pub dont_wants: Vec<String>,
    pub barriers: Vec<BarrierItem>,
    pub eulogy_partner: String,
    pub eulogy_child: String,
    pub eulogy_friend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierItem {
    pub description: String,
    pub impact_percentage: i64,
}

/// 起始资本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialContext {
    pub super_balance: f64,
    pub cash_savings: f64,
    pub shares_investments: f64,
    pub investment_properties: f64,
    pub other_assets: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigRocks {
    pub primary_residence: Residence,
    pub holiday_home: LifestyleItem,
    pub aged_care: AgedCare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residence {
    pub current_value: f64,
    pub outstanding_mortgage: f64,
    pub holding_cost: f64,
    pub strategy: String,
    pub dwelling_type: String,
    pub location_type: String,
    pub growth_assumption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgedCare {
    pub entry_age: i64,
    pub rad_deposit: f64,
    pub daily_fees: f64,
}

/// 五属性条目（购入价值 / 购入时点 / 持有成本 / 处置时点 / 处置价值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleItem {
    pub name: String,
    pub purchase_value: f64,
    pub purchase_timing: i64,
    pub holding_cost: f64,
    pub disposal_timing: i64,
    pub disposal_value: f64,
}

/// 车辆条目（带更换周期，不走五属性布局）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleItem {
    pub name: String,
    pub purchase_value: f64,
    pub start_age: i64,
    pub replacement_cycle: i64,
    pub holding_cost: f64,
    pub end_age: i64,
}

/// 旅行档案
///
/// 四个档案字段子集不同：国内档案没有机票与淡旺季录入，
/// 未录入的字段按服务端默认值补齐后一并提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelProfile {
    pub name: String,
    pub duration_days: i64,
    pub flight_cost_per_person: f64,
    pub seasonality: String,
    pub cost_accom_daily: f64,
    pub cost_transport_daily: f64,
    pub cost_food_daily: f64,
    pub cost_fun_daily: f64,
    pub start_age: i64,
    pub end_age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeStage {
    pub name: String,
    pub start_age: i64,
    pub end_age: i64,
    pub annual_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub cars: Vec<VehicleItem>,
    pub travel_international: TravelProfile,
    pub travel_domestic: TravelProfile,
    pub travel_parents: TravelProfile,
    pub travel_others: TravelProfile,
    pub boat: LifestyleItem,
    pub caravan: LifestyleItem,
    pub life_stages: Vec<LifeStage>,
    pub medical_expenses: LifestyleItem,
    pub health_buffer: LifestyleItem,
    pub emergency_reserve: f64,
}

/// 家庭馈赠：三个五属性列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyLegacy {
    pub wedding_contributions: Vec<LifestyleItem>,
    pub home_deposits: Vec<LifestyleItem>,
    pub education_support: Vec<LifestyleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub general_inflation: f64,
    pub education_inflation: f64,
    pub car_depreciation: f64,
    pub fee_load: f64,
    pub risk_profile: String,
}
