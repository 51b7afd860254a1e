//! 表单聚合器 - 业务能力层
//!
//! 单一操作 `collect()`：在提交时刻同步读取所有控件与列表，
//! 产出分析服务期望的规范化请求文档。数值一律"解析否则回退"，
//! 每个字段的回退常量就写在读取处，来源不同（单例控件 / 列表行）
//! 不影响常量取值。处置时点的回退按条目类型各异（80 / 90 / 100），
//! 这是既定业务规则，不要统一。

use tracing::debug;

use crate::form::{FieldBindings, FormStore, ListController};
use crate::models::request::{
    AgedCare, AnalysisRequest, Assumptions, BarrierItem, BigRocks, ClientProfile, FamilyLegacy,
    FinancialContext, LifeStage, Lifestyle, LifestyleItem, Residence, TravelProfile, VehicleItem,
};

/// 表单聚合器
///
/// 职责：
/// - 只读快照，不修改表单状态
/// - 不做校验，缺失 / 非法值静默回退
pub struct Aggregator<'a> {
    store: &'a FormStore,
    bindings: &'a FieldBindings,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a FormStore, bindings: &'a FieldBindings) -> Self {
        Self { store, bindings }
    }

    /// 聚合整个表单为请求文档
    pub fn collect(&self) -> AnalysisRequest {
        let request = AnalysisRequest {
            profile: self.collect_profile(),
            context: self.collect_context(),
            big_rocks: self.collect_big_rocks(),
            lifestyle: self.collect_lifestyle(),
            family: self.collect_family(),
            assumptions: self.collect_assumptions(),
        };
        debug!(
            "聚合完成: {} 辆车, {} 个阶段, {} 个障碍",
            request.lifestyle.cars.len(),
            request.lifestyle.life_stages.len(),
            request.profile.barriers.len()
        );
        request
    }

    // ========== 分区聚合 ==========

    fn collect_profile(&self) -> ClientProfile {
        ClientProfile {
            partner1_name: self.text("profile.partner1_name"),
            partner1_dob: self.text("profile.partner1_dob"),
            partner2_name: self.opt_text("profile.partner2_name"),
            partner2_dob: self.opt_text("profile.partner2_dob"),
            partner1_retirement_age: self.int("profile.partner1_retirement_age", 65),
            partner2_retirement_age: self.int("profile.partner2_retirement_age", 60),
            wants: split_tags(&self.text("profile.wants")),
            dont_wants: split_tags(&self.text("profile.dont_wants")),
            barriers: self.barrier_items(),
            eulogy_partner: self.text("profile.eulogy_partner"),
            eulogy_child: self.text("profile.eulogy_child"),
            eulogy_friend: self.text("profile.eulogy_friend"),
        }
    }

    fn collect_context(&self) -> FinancialContext {
        FinancialContext {
            super_balance: self.num("context.super_balance", 0.0),
            cash_savings: self.num("context.cash_savings", 0.0),
            shares_investments: self.num("context.shares_investments", 0.0),
            investment_properties: self.num("context.investment_properties", 0.0),
            other_assets: 0.0,
        }
    }

    fn collect_big_rocks(&self) -> BigRocks {
        BigRocks {
            primary_residence: Residence {
                current_value: self.num("big_rocks.residence.current_value", 0.0),
                outstanding_mortgage: self.num("big_rocks.residence.outstanding_mortgage", 0.0),
                holding_cost: self.num("big_rocks.residence.holding_cost", 0.0),
                strategy: self.text("big_rocks.residence.strategy"),
                dwelling_type: self.text("big_rocks.residence.dwelling_type"),
                location_type: self.text("big_rocks.residence.location_type"),
                growth_assumption: self.text("big_rocks.residence.growth_assumption"),
            },
            holiday_home: LifestyleItem {
                name: "Holiday Home".to_string(),
                purchase_value: self.num("big_rocks.holiday_home.purchase_value", 0.0),
                purchase_timing: 0,
                holding_cost: self.num("big_rocks.holiday_home.holding_cost", 0.0),
                disposal_timing: 80,
                disposal_value: 0.0,
            },
            aged_care: AgedCare {
                entry_age: self.int("big_rocks.aged_care.entry_age", 85),
                rad_deposit: self.num("big_rocks.aged_care.rad_deposit", 1_000_000.0),
                daily_fees: 0.0,
            },
        }
    }

    fn collect_lifestyle(&self) -> Lifestyle {
        Lifestyle {
            cars: self.vehicle_items("lists.cars"),
            travel_international: TravelProfile {
                name: "International Travel".to_string(),
                duration_days: self.int("lifestyle.travel_international.duration_days", 0),
                flight_cost_per_person: self.num("lifestyle.travel_international.flight_cost", 2500.0),
                seasonality: self.text("lifestyle.travel_international.seasonality"),
                cost_accom_daily: self.num("lifestyle.travel_international.accom_daily", 0.0),
                cost_transport_daily: 0.0,
                cost_food_daily: self.num("lifestyle.travel_international.food_daily", 0.0),
                cost_fun_daily: self.num("lifestyle.travel_international.fun_daily", 0.0),
                start_age: self.int("lifestyle.travel_international.start_age", 60),
                end_age: self.int("lifestyle.travel_international.end_age", 80),
            },
            travel_domestic: TravelProfile {
                name: "Domestic Travel".to_string(),
                duration_days: self.int("lifestyle.travel_domestic.duration_days", 0),
                flight_cost_per_person: 0.0,
                seasonality: "Shoulder".to_string(),
                cost_accom_daily: self.num("lifestyle.travel_domestic.accom_daily", 0.0),
                cost_transport_daily: 0.0,
                cost_food_daily: 0.0,
                cost_fun_daily: 0.0,
                start_age: self.int("lifestyle.travel_domestic.start_age", 60),
                end_age: self.int("lifestyle.travel_domestic.end_age", 85),
            },
            travel_parents: self.fixed_week_travel("Travel to Parents", "lifestyle.travel_parents.accom_daily"),
            travel_others: self.fixed_week_travel("Other Travel", "lifestyle.travel_others.accom_daily"),
            boat: LifestyleItem {
                name: "Boat".to_string(),
                purchase_value: self.num("lifestyle.boat.purchase_value", 0.0),
                purchase_timing: 60,
                holding_cost: 5000.0,
                disposal_timing: 70,
                disposal_value: 0.0,
            },
            caravan: LifestyleItem {
                name: "Caravan".to_string(),
                purchase_value: self.num("lifestyle.caravan.purchase_value", 0.0),
                purchase_timing: 60,
                holding_cost: 2000.0,
                disposal_timing: 75,
                disposal_value: 0.0,
            },
            life_stages: self.stage_items("lists.stages"),
            medical_expenses: LifestyleItem {
                name: "Medical Expenses".to_string(),
                purchase_value: self.num("lifestyle.medical.purchase_value", 0.0),
                purchase_timing: 60,
                holding_cost: 0.0,
                disposal_timing: 100,
                disposal_value: 0.0,
            },
            health_buffer: LifestyleItem {
                name: "Health Buffer".to_string(),
                purchase_value: self.num("lifestyle.health_buffer.purchase_value", 5000.0),
                purchase_timing: 60,
                holding_cost: 0.0,
                disposal_timing: 100,
                disposal_value: 0.0,
            },
            emergency_reserve: self.num("lifestyle.emergency_reserve", 50000.0),
        }
    }

    fn collect_family(&self) -> FamilyLegacy {
        FamilyLegacy {
            wedding_contributions: self.five_attr_items("lists.weddings"),
            home_deposits: self.five_attr_items("lists.deposits"),
            education_support: self.five_attr_items("lists.education"),
        }
    }

    fn collect_assumptions(&self) -> Assumptions {
        Assumptions {
            general_inflation: self.num("assumptions.general_inflation", 3.3),
            education_inflation: self.num("assumptions.education_inflation", 8.0),
            car_depreciation: self.num("assumptions.car_depreciation", 15.0),
            fee_load: self.num("assumptions.fee_load", 1.5),
            risk_profile: {
                let raw = self.text("assumptions.risk_profile");
                if raw.is_empty() { "Balanced".to_string() } else { raw }
            },
        }
    }

    // ========== 列表行转换 ==========

    fn vehicle_items(&self, logical: &str) -> Vec<VehicleItem> {
        self.rows(logical)
            .map(|list| {
                list.rows()
                    .map(|row| VehicleItem {
                        name: row.get("name").to_string(),
                        purchase_value: parse_num(row.get("purchase_value"), 0.0),
                        start_age: parse_int(row.get("start_age"), 0),
                        replacement_cycle: parse_int(row.get("replacement_cycle"), 10),
                        holding_cost: parse_num(row.get("holding_cost"), 0.0),
                        end_age: parse_int(row.get("end_age"), 90),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn five_attr_items(&self, logical: &str) -> Vec<LifestyleItem> {
        self.rows(logical)
            .map(|list| {
                list.rows()
                    .map(|row| LifestyleItem {
                        name: row.get("name").to_string(),
                        purchase_value: parse_num(row.get("purchase_value"), 0.0),
                        purchase_timing: parse_int(row.get("purchase_timing"), 0),
                        holding_cost: parse_num(row.get("holding_cost"), 0.0),
                        disposal_timing: parse_int(row.get("disposal_timing"), 100),
                        disposal_value: parse_num(row.get("disposal_value"), 0.0),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn stage_items(&self, logical: &str) -> Vec<LifeStage> {
        self.rows(logical)
            .map(|list| {
                list.rows()
                    .map(|row| LifeStage {
                        name: row.get("name").to_string(),
                        start_age: parse_int(row.get("start_age"), 60),
                        end_age: parse_int(row.get("end_age"), 85),
                        annual_income: parse_num(row.get("annual_income"), 50000.0),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn barrier_items(&self) -> Vec<BarrierItem> {
        self.rows("lists.barriers")
            .map(|list| {
                list.rows()
                    .map(|row| BarrierItem {
                        description: row.get("description").to_string(),
                        impact_percentage: parse_int(row.get("impact_percentage"), 0),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    // ========== 读取辅助 ==========

    fn rows(&self, logical: &str) -> Option<&ListController> {
        self.store.list(self.bindings.resolve(logical))
    }

    fn text(&self, logical: &str) -> String {
        self.store
            .value(self.bindings.resolve(logical))
            .unwrap_or("")
            .to_string()
    }

    /// 空串归一化为 None
    fn opt_text(&self, logical: &str) -> Option<String> {
        let value = self.text(logical);
        if value.is_empty() { None } else { Some(value) }
    }

    fn num(&self, logical: &str, fallback: f64) -> f64 {
        parse_num(self.store.value(self.bindings.resolve(logical)).unwrap_or(""), fallback)
    }

    fn int(&self, logical: &str, fallback: i64) -> i64 {
        parse_int(self.store.value(self.bindings.resolve(logical)).unwrap_or(""), fallback)
    }

    /// 固定一周行程的旅行档案（探亲 / 其他），只录入每日住宿成本
    fn fixed_week_travel(&self, name: &str, accom_logical: &str) -> TravelProfile {
        TravelProfile {
            name: name.to_string(),
            duration_days: 7,
            flight_cost_per_person: 0.0,
            seasonality: "Shoulder".to_string(),
            cost_accom_daily: self.num(accom_logical, 0.0),
            cost_transport_daily: 0.0,
            cost_food_daily: 0.0,
            cost_fun_daily: 0.0,
            start_age: 60,
            end_age: 80,
        }
    }
}

/// 数值解析，失败或缺失时回退
fn parse_num(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// 整数解析，失败或缺失时回退（兼容 "60.0" 这类录入）
fn parse_int(raw: &str, fallback: i64) -> i64 {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return v;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => fallback,
    }
}

/// 按逗号切分自由文本，去掉空白项
///
/// 空输入产出空数组，绝不产出 [""]
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormStore;

    fn store_and_bindings() -> (FormStore, FieldBindings) {
        (FormStore::with_host_controls(), FieldBindings::default())
    }

    #[test]
    fn test_split_tags_scenarios() {
        assert_eq!(split_tags("travel, family, health"), vec!["travel", "family", "health"]);
        assert_eq!(split_tags(""), Vec::<String>::new());
        assert_eq!(split_tags(" , ,"), Vec::<String>::new());
    }

    /// holding_cost 缺省的车辆行，聚合后应带 1500
    #[test]
    fn test_vehicle_round_trip_with_default_holding_cost() {
        let (mut store, bindings) = store_and_bindings();
        store.list_mut("carList").unwrap().add(&[
            ("name", "Test"),
            ("purchase_value", "1000"),
            ("start_age", "60"),
            ("replacement_cycle", "5"),
            ("end_age", "80"),
        ]);

        let request = Aggregator::new(&store, &bindings).collect();
        assert_eq!(
            request.lifestyle.cars,
            vec![VehicleItem {
                name: "Test".to_string(),
                purchase_value: 1000.0,
                start_age: 60,
                replacement_cycle: 5,
                holding_cost: 1500.0,
                end_age: 80,
            }]
        );
    }

    #[test]
    fn test_collect_array_tracks_adds_and_removes() {
        let (mut store, bindings) = store_and_bindings();
        let list = store.list_mut("stageList").unwrap();
        let a = list.add(&[("name", "Early")]);
        let _b = list.add(&[("name", "Mid")]);
        let _c = list.add(&[("name", "Late")]);
        list.remove(a);

        let request = Aggregator::new(&store, &bindings).collect();
        let names: Vec<&str> = request.lifestyle.life_stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Late"]);
    }

    #[test]
    fn test_empty_wants_collects_to_empty_array() {
        let (store, bindings) = store_and_bindings();
        let request = Aggregator::new(&store, &bindings).collect();
        assert!(request.profile.wants.is_empty());
        assert!(request.profile.dont_wants.is_empty());
    }

    #[test]
    fn test_wants_split_and_trimmed() {
        let (mut store, bindings) = store_and_bindings();
        store.set_value("wants_list", "travel, family, health");
        let request = Aggregator::new(&store, &bindings).collect();
        assert_eq!(request.profile.wants, vec!["travel", "family", "health"]);
    }

    /// 处置 / 终止时点的回退按条目类型各异，保持 90 / 100 的不一致
    #[test]
    fn test_disposal_fallbacks_differ_by_kind() {
        let (mut store, bindings) = store_and_bindings();
        // 建行默认值会把空值补成可解析的数字，这里模拟用户清空输入
        let cars = store.list_mut("carList").unwrap();
        let car = cars.add(&[]);
        cars.row_mut(car).unwrap().set("end_age", "");
        let weddings = store.list_mut("weddingList").unwrap();
        let wedding = weddings.add(&[]);
        weddings.row_mut(wedding).unwrap().set("disposal_timing", "");

        let request = Aggregator::new(&store, &bindings).collect();
        assert_eq!(request.lifestyle.cars[0].end_age, 90);
        assert_eq!(request.family.wedding_contributions[0].disposal_timing, 100);
    }

    #[test]
    fn test_partner2_blank_becomes_null() {
        let (mut store, bindings) = store_and_bindings();
        store.set_value("p1_name", "Alex");
        let request = Aggregator::new(&store, &bindings).collect();
        assert_eq!(request.profile.partner1_name, "Alex");
        assert_eq!(request.profile.partner2_name, None);
        assert_eq!(request.profile.partner2_dob, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["profile"]["partner2_name"].is_null());
    }

    #[test]
    fn test_singleton_fallback_constants() {
        let (store, bindings) = store_and_bindings();
        let request = Aggregator::new(&store, &bindings).collect();

        assert_eq!(request.big_rocks.aged_care.entry_age, 85);
        assert_eq!(request.big_rocks.aged_care.rad_deposit, 1_000_000.0);
        assert_eq!(request.big_rocks.holiday_home.disposal_timing, 80);
        assert_eq!(request.lifestyle.boat.holding_cost, 5000.0);
        assert_eq!(request.lifestyle.boat.disposal_timing, 70);
        assert_eq!(request.lifestyle.caravan.holding_cost, 2000.0);
        assert_eq!(request.lifestyle.health_buffer.purchase_value, 5000.0);
        assert_eq!(request.lifestyle.emergency_reserve, 50000.0);
        assert_eq!(request.lifestyle.travel_international.flight_cost_per_person, 2500.0);
        assert_eq!(request.assumptions.general_inflation, 3.3);
        assert_eq!(request.assumptions.risk_profile, "Balanced");
    }

    /// 请求文档的嵌套 key 布局必须与服务端 schema 一致
    #[test]
    fn test_nested_key_layout() {
        let (store, bindings) = store_and_bindings();
        let json = serde_json::to_value(Aggregator::new(&store, &bindings).collect()).unwrap();

        for path in [
            "profile", "context", "big_rocks", "lifestyle", "family", "assumptions",
        ] {
            assert!(json.get(path).is_some(), "缺少顶层分区 {path}");
        }
        assert!(json["big_rocks"]["primary_residence"]["growth_assumption"].is_string());
        assert!(json["lifestyle"]["travel_international"]["flight_cost_per_person"].is_number());
        assert!(json["family"]["wedding_contributions"].is_array());
        assert!(json["context"]["other_assets"].is_number());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_num("1234.5", 0.0), 1234.5);
        assert_eq!(parse_num("abc", 7.0), 7.0);
        assert_eq!(parse_num("", 7.0), 7.0);
        // 0 是合法值，不触发回退
        assert_eq!(parse_num("0", 7.0), 0.0);
        assert_eq!(parse_int("60.0", 0), 60);
        assert_eq!(parse_int("x", 42), 42);
    }
}
