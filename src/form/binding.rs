//! 字段绑定配置
//!
//! 逻辑字段名到 UI 控件 id 的显式映射，注入给 Aggregator 使用，
//! 避免把控件 id 硬编码进聚合逻辑，方便替换任意 UI 工具包。
//! 默认表即宿主页面约定。

use std::collections::BTreeMap;

/// 字段绑定配置
#[derive(Debug, Clone)]
pub struct FieldBindings {
    map: BTreeMap<&'static str, String>,
}

impl FieldBindings {
    /// 宿主页面的默认绑定表
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析逻辑字段名对应的控件 id
    ///
    /// 未登记的逻辑名原样返回（允许直接用控件 id 做逻辑名）
    pub fn resolve<'a>(&'a self, logical: &'a str) -> &'a str {
        self.map.get(logical).map(String::as_str).unwrap_or(logical)
    }

    /// 覆盖某个绑定
    pub fn bind(&mut self, logical: &'static str, control_id: impl Into<String>) {
        self.map.insert(logical, control_id.into());
    }
}

impl Default for FieldBindings {
    fn default() -> Self {
        let entries: &[(&'static str, &str)] = &[
            // --- profile ---
            ("profile.partner1_name", "p1_name"),
            ("profile.partner1_dob", "p1_dob"),
            ("profile.partner2_name", "p2_name"),
            ("profile.partner2_dob", "p2_dob"),
            ("profile.partner1_retirement_age", "p1_retire_age"),
            ("profile.partner2_retirement_age", "p2_retire_age"),
            ("profile.wants", "wants_list"),
            ("profile.dont_wants", "dont_wants_list"),
            ("profile.eulogy_partner", "eulogy_partner"),
            ("profile.eulogy_child", "eulogy_child"),
            ("profile.eulogy_friend", "eulogy_friend"),
            // --- context ---
            ("context.super_balance", "asset_super"),
            ("context.cash_savings", "asset_cash"),
            ("context.shares_investments", "asset_shares"),
            ("context.investment_properties", "asset_props"),
            // --- big_rocks ---
            ("big_rocks.residence.current_value", "home_val"),
            ("big_rocks.residence.outstanding_mortgage", "home_debt"),
            ("big_rocks.residence.holding_cost", "home_cost"),
            ("big_rocks.residence.strategy", "home_strat"),
            ("big_rocks.residence.dwelling_type", "home_type"),
            ("big_rocks.residence.location_type", "home_loc"),
            ("big_rocks.residence.growth_assumption", "home_growth"),
            ("big_rocks.holiday_home.purchase_value", "hol_val"),
            ("big_rocks.holiday_home.holding_cost", "hol_cost"),
            ("big_rocks.aged_care.entry_age", "ac_entry"),
            ("big_rocks.aged_care.rad_deposit", "ac_rad"),
            // --- lifestyle：旅行档案 ---
            ("lifestyle.travel_international.duration_days", "trv_i_days"),
            ("lifestyle.travel_international.flight_cost", "trv_i_flight"),
            ("lifestyle.travel_international.seasonality", "trv_i_season"),
            ("lifestyle.travel_international.accom_daily", "trv_i_accom"),
            ("lifestyle.travel_international.food_daily", "trv_i_food"),
            ("lifestyle.travel_international.fun_daily", "trv_i_fun"),
            ("lifestyle.travel_international.start_age", "trv_i_start"),
            ("lifestyle.travel_international.end_age", "trv_i_end"),
            ("lifestyle.travel_domestic.duration_days", "trv_d_days"),
            ("lifestyle.travel_domestic.accom_daily", "trv_d_daily"),
            ("lifestyle.travel_domestic.start_age", "trv_d_start"),
            ("lifestyle.travel_domestic.end_age", "trv_d_end"),
            ("lifestyle.travel_parents.accom_daily", "trv_parents"),
            ("lifestyle.travel_others.accom_daily", "trv_others"),
            // --- lifestyle：单例资产与缓冲 ---
            ("lifestyle.boat.purchase_value", "asset_boat"),
            ("lifestyle.caravan.purchase_value", "asset_caravan"),
            ("lifestyle.medical.purchase_value", "med_cost"),
            ("lifestyle.health_buffer.purchase_value", "health_cost"),
            ("lifestyle.emergency_reserve", "emergency_res"),
            // --- assumptions ---
            ("assumptions.general_inflation", "asm_inf_gen"),
            ("assumptions.education_inflation", "asm_inf_edu"),
            ("assumptions.car_depreciation", "asm_dep_car"),
            ("assumptions.fee_load", "asm_fees"),
            ("assumptions.risk_profile", "asm_risk"),
            // --- 动态列表容器 ---
            ("lists.cars", "carList"),
            ("lists.stages", "stageList"),
            ("lists.barriers", "barrierList"),
            ("lists.weddings", "weddingList"),
            ("lists.deposits", "depositList"),
            ("lists.education", "educationList"),
        ];

        Self {
            map: entries
                .iter()
                .map(|(logical, id)| (*logical, (*id).to_string()))
                .collect(),
        }
    }
}
