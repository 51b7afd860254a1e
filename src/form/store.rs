//! 表单状态仓库
//!
//! 以显式状态对象承载整个表单面：单例控件（文本 / 数值 / 下拉 / 多行文本）
//! 加上具名的动态列表。宿主页面约定的控件 id 与列表容器在
//! `with_host_controls` 里一次性注册。

use std::collections::BTreeMap;

use crate::form::list::ListController;
use crate::models::schema::ItemKind;

/// 控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Number,
    TextArea,
    Select,
}

/// 下拉选项
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// 提交用的值
    pub value: String,
    /// 展示用的文案
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// 单例控件
#[derive(Debug, Clone)]
pub struct Control {
    pub kind: ControlKind,
    pub value: String,
    /// 仅下拉控件使用
    pub options: Vec<SelectOption>,
}

/// 表单状态仓库
#[derive(Debug, Default)]
pub struct FormStore {
    controls: BTreeMap<String, Control>,
    lists: BTreeMap<String, ListController>,
}

impl FormStore {
    /// 创建空仓库
    pub fn new() -> Self {
        Self::default()
    }

    /// 按宿主页面约定注册全部控件与列表容器
    pub fn with_host_controls() -> Self {
        let mut store = Self::new();

        // --- 身份 / 日期 / 退休年龄 ---
        store.register(ControlKind::Text, &["p1_name", "p1_dob", "p2_name", "p2_dob"]);
        store.register(ControlKind::Number, &["p1_retire_age", "p2_retire_age"]);
        store.register(
            ControlKind::TextArea,
            &["wants_list", "dont_wants_list", "eulogy_partner", "eulogy_child", "eulogy_friend"],
        );

        // --- 资产余额 ---
        store.register(
            ControlKind::Number,
            &["asset_super", "asset_cash", "asset_shares", "asset_props"],
        );

        // --- 自住房 / 度假屋 / 养老院 ---
        store.register(ControlKind::Number, &["home_val", "home_debt", "home_cost"]);
        store.register_select(
            "home_strat",
            &[("age_in_place", "Age in Place"), ("downsize", "Downsize at 75"), ("sell_rent", "Sell & Rent")],
            "age_in_place",
        );
        store.register_select("home_type", &[("House", "House"), ("Unit", "Unit")], "House");
        store.register_select("home_loc", &[("City", "City"), ("Rural", "Rural")], "City");
        store.register_select(
            "home_growth",
            &[("Low", "Low"), ("Average", "Average"), ("High", "High")],
            "Average",
        );
        store.register(ControlKind::Number, &["hol_val", "hol_cost", "ac_entry", "ac_rad"]);

        // --- 四类旅行档案 ---
        store.register(
            ControlKind::Number,
            &["trv_i_days", "trv_i_flight", "trv_i_accom", "trv_i_food", "trv_i_fun", "trv_i_start", "trv_i_end"],
        );
        store.register_select(
            "trv_i_season",
            &[("Peak", "Peak"), ("Shoulder", "Shoulder"), ("Off-Peak", "Off-Peak")],
            "Shoulder",
        );
        store.register(ControlKind::Number, &["trv_d_days", "trv_d_daily", "trv_d_start", "trv_d_end"]);
        store.register(ControlKind::Number, &["trv_parents", "trv_others"]);

        // --- 单例资产 / 医疗 / 应急储备 ---
        store.register(
            ControlKind::Number,
            &["asset_boat", "asset_caravan", "med_cost", "health_cost", "emergency_res"],
        );

        // --- 假设参数 ---
        store.register(ControlKind::Number, &["asm_inf_gen", "asm_inf_edu", "asm_dep_car", "asm_fees"]);
        store.register_select(
            "asm_risk",
            &[
                ("Conservative", "Conservative"),
                ("Moderate", "Moderate"),
                ("Balanced", "Balanced"),
                ("Growth", "Growth"),
                ("Pure Growth", "Pure Growth"),
            ],
            "Balanced",
        );

        // --- 动态列表容器 ---
        store.add_list("carList", ItemKind::Vehicle);
        store.add_list("stageList", ItemKind::Stage);
        store.add_list("barrierList", ItemKind::Barrier);
        store.add_list("weddingList", ItemKind::FiveAttribute);
        store.add_list("depositList", ItemKind::FiveAttribute);
        store.add_list("educationList", ItemKind::FiveAttribute);

        store
    }

    /// 批量注册同类控件
    fn register(&mut self, kind: ControlKind, ids: &[&str]) {
        for id in ids {
            self.controls.insert(
                (*id).to_string(),
                Control { kind, value: String::new(), options: Vec::new() },
            );
        }
    }

    /// 注册下拉控件
    pub fn register_select(&mut self, id: &str, options: &[(&str, &str)], selected: &str) {
        self.controls.insert(
            id.to_string(),
            Control {
                kind: ControlKind::Select,
                value: selected.to_string(),
                options: options
                    .iter()
                    .map(|(value, label)| SelectOption::new(*value, *label))
                    .collect(),
            },
        );
    }

    /// 写入控件值
    ///
    /// 未注册的 id 按文本控件补登（宿主缺少元素属于集成错误，这里不做防御）
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        match self.controls.get_mut(id) {
            Some(control) => control.value = value.into(),
            None => {
                self.controls.insert(
                    id.to_string(),
                    Control { kind: ControlKind::Text, value: value.into(), options: Vec::new() },
                );
            }
        }
    }

    /// 读取控件值，控件不存在时返回 None
    pub fn value(&self, id: &str) -> Option<&str> {
        self.controls.get(id).map(|c| c.value.as_str())
    }

    /// 读取控件
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.get(id)
    }

    /// 下拉控件当前选中项的展示文案
    pub fn selected_label(&self, id: &str) -> Option<&str> {
        let control = self.controls.get(id)?;
        control
            .options
            .iter()
            .find(|opt| opt.value == control.value)
            .map(|opt| opt.label.as_str())
    }

    /// 登记动态列表容器
    pub fn add_list(&mut self, name: &str, kind: ItemKind) {
        self.lists
            .insert(name.to_string(), ListController::new(name, kind));
    }

    pub fn list(&self, name: &str) -> Option<&ListController> {
        self.lists.get(name)
    }

    pub fn list_mut(&mut self, name: &str) -> Option<&mut ListController> {
        self.lists.get_mut(name)
    }

    /// 全部列表（按名称序）
    pub fn lists(&self) -> impl Iterator<Item = &ListController> {
        self.lists.values()
    }
}
