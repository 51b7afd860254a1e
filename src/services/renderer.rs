//! 结果渲染器 - 业务能力层
//!
//! 把响应文档投影到结果视图。渲染是幂等的：每个区域整体覆写，
//! 不做追加；可选子树（资本桶 / 韧性报告）缺失时清空对应区域，
//! 绝不让整次渲染失败。台账容器不在基础视图里，首次渲染时
//! 创建并插入到假设区块之前，之后复用已有容器，绝不重复创建。

use tracing::{debug, info};

use crate::models::response::{AnalysisResponse, BucketDetail};
use crate::view::node::{find_by_id_mut, Element, Table, ViewNode};

/// 结果视图区域 id
pub const NARRATIVE_ID: &str = "res_narrative";
pub const NUM1_ID: &str = "res_num1";
pub const NUM2_ID: &str = "res_num2";
pub const GAP_ID: &str = "res_gap";
pub const BUCKETS_ID: &str = "res_buckets";
pub const REGISTER_ID: &str = "res_register_container";
pub const RESILIENCE_ID: &str = "res_resilience";
pub const FEES_ID: &str = "res_fees";
pub const LIFE_FUNDED_ID: &str = "res_lifefunded";
pub const FEE_NARRATIVE_ID: &str = "res_fee_narrative";
pub const ASSUMPTIONS_ID: &str = "res_assumptions";
pub const EXPORT_BUTTON_ID: &str = "download_pdf_btn";

/// 结果视图
///
/// 显式持有的 UI 状态对象，渲染器是它唯一的写入方
#[derive(Debug, Clone)]
pub struct ResultView {
    /// 录入视图是否可见
    pub input_visible: bool,
    /// 结果视图是否可见
    pub result_visible: bool,
    /// 结果区域的节点森林
    pub sections: Vec<ViewNode>,
}

impl ResultView {
    /// 构建基础视图骨架（与宿主页面的结果分区一致，台账容器不在其中）
    pub fn new() -> Self {
        let sections = vec![
            section("section-card", NARRATIVE_ID, "Your Life Narrative"),
            Element::new("section")
                .with_id("res_two_numbers")
                .with_class("section-card")
                .child(heading("The Two Numbers"))
                .child(Element::new("div").with_id(NUM1_ID).into_node())
                .child(Element::new("div").with_id(NUM2_ID).into_node())
                .child(Element::new("p").with_id(GAP_ID).into_node())
                .into_node(),
            section("section-card", BUCKETS_ID, "Capital Architecture"),
            section("section-card", RESILIENCE_ID, "Resilience Check"),
            Element::new("section")
                .with_id("res_fee_card")
                .with_class("section-card")
                .child(heading("Fee Relativity"))
                .child(Element::new("div").with_id(FEES_ID).into_node())
                .child(Element::new("div").with_id(LIFE_FUNDED_ID).into_node())
                .child(Element::new("p").with_id(FEE_NARRATIVE_ID).into_node())
                .into_node(),
            Element::new("section")
                .with_id("res_assumptions_card")
                .with_class("section-card")
                .child(heading("Assumptions Log"))
                .child(Element::new("pre").with_id(ASSUMPTIONS_ID).into_node())
                .into_node(),
            Element::new("button")
                .with_id(EXPORT_BUTTON_ID)
                .text_child("Download PDF Report")
                .into_node(),
        ];

        Self {
            input_visible: true,
            result_visible: false,
            sections,
        }
    }
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}

fn section(class: &str, id: &str, title: &str) -> ViewNode {
    Element::new("section")
        .with_id(format!("{id}_card"))
        .with_class(class)
        .child(heading(title))
        .child(Element::new("div").with_id(id).into_node())
        .into_node()
}

fn heading(title: &str) -> ViewNode {
    Element::new("h3").text_child(title).into_node()
}

/// 结果渲染器
pub struct Renderer;

impl Renderer {
    /// 渲染响应文档到结果视图
    ///
    /// 可重复调用：后一次渲染不留下前一次的任何残余
    pub fn render(view: &mut ResultView, response: &AnalysisResponse) {
        view.input_visible = false;
        view.result_visible = true;

        Self::render_narrative(view, response);
        Self::render_two_numbers(view, response);
        Self::render_buckets(view, response);
        Self::render_register(view, response);
        Self::render_resilience(view, response);
        Self::render_fees(view, response);
        Self::render_assumptions(view, response);

        info!(
            "✓ 结果渲染完成: 台账 {} 条, 资本桶 {}",
            response.lifeline_register.len(),
            if response.capital_structure.is_some() { "有" } else { "无" }
        );
    }

    fn render_narrative(view: &mut ResultView, response: &AnalysisResponse) {
        if let Some(region) = find_by_id_mut(&mut view.sections, NARRATIVE_ID) {
            region.children = vec![
                Element::new("p")
                    .text_child(format!("\"{}\"", response.client_narrative))
                    .into_node(),
                Element::new("div")
                    .with_class("true-north")
                    .text_child(format!(
                        "Top 3 Wants: {}",
                        response.true_north.top_3_wants.join(", ")
                    ))
                    .into_node(),
                Element::new("div")
                    .with_class("true-north")
                    .text_child(format!(
                        "Top 3 Avoids: {}",
                        response.true_north.top_3_dont_wants.join(", ")
                    ))
                    .into_node(),
            ];
        }
    }

    fn render_two_numbers(view: &mut ResultView, response: &AnalysisResponse) {
        let numbers = &response.two_numbers;
        set_text(view, NUM1_ID, format_currency(numbers.necessary_life_capital));
        set_text(view, NUM2_ID, format_currency(numbers.best_life_capital));
        set_text(view, GAP_ID, numbers.gap_analysis.clone());
    }

    /// 资本桶：可选子树，缺失时清空区域
    fn render_buckets(view: &mut ResultView, response: &AnalysisResponse) {
        let Some(region) = find_by_id_mut(&mut view.sections, BUCKETS_ID) else {
            return;
        };
        match &response.capital_structure {
            Some(structure) => {
                region.children = vec![
                    bucket_card("Bucket 1: Stability", &structure.bucket_1),
                    bucket_card("Bucket 2: Momentum", &structure.bucket_2),
                    bucket_card("Bucket 3: Growth", &structure.bucket_3),
                    Element::new("p")
                        .with_class("bucket-explanation")
                        .text_child(structure.explanation.clone())
                        .into_node(),
                ];
            }
            None => {
                debug!("响应缺少 capital_structure，清空资本桶区域");
                region.children.clear();
            }
        }
    }

    /// 台账：首次渲染时创建容器并插入到假设区块之前，之后复用
    fn render_register(view: &mut ResultView, response: &AnalysisResponse) {
        let table = ViewNode::Table(Table {
            headers: vec![
                "Item".to_string(),
                "Category".to_string(),
                "Purchase Val".to_string(),
                "Start".to_string(),
                "Hold/Yr".to_string(),
                "End".to_string(),
                "Disposal".to_string(),
            ],
            rows: response
                .lifeline_register
                .iter()
                .map(|entry| {
                    vec![
                        entry.item_name.clone(),
                        entry.category.clone(),
                        format_currency(entry.purchase_value),
                        entry.purchase_timing.clone(),
                        format_currency(entry.holding_cost),
                        entry.disposal_timing.clone(),
                        format_currency(entry.disposal_value),
                    ]
                })
                .collect(),
        });

        let children = vec![heading("The Lifeline Register (5-Attribute Rule)"), table];

        if let Some(existing) = find_by_id_mut(&mut view.sections, REGISTER_ID) {
            existing.children = children;
            return;
        }

        let container = Element::new("section")
            .with_id(REGISTER_ID)
            .with_class("section-card");
        let container = ViewNode::Element(Element { children, ..container });

        // 锚点：假设区块之前；找不到锚点时追加到末尾
        let anchor = view.sections.iter().position(|node| {
            matches!(node, ViewNode::Element(e) if e.id.as_deref() == Some("res_assumptions_card"))
        });
        match anchor {
            Some(index) => view.sections.insert(index, container),
            None => view.sections.push(container),
        }
    }

    /// 韧性报告：可选子树，缺失时清空区域
    fn render_resilience(view: &mut ResultView, response: &AnalysisResponse) {
        let Some(region) = find_by_id_mut(&mut view.sections, RESILIENCE_ID) else {
            return;
        };
        match &response.resilience_report {
            Some(report) => {
                region.children = vec![
                    labelled_line("Market Shock (30% Drop)", &report.market_shock_response),
                    labelled_line("Health Crisis", &report.health_event_response),
                    labelled_line("Early Departure", &report.early_death_implication),
                    labelled_line("Longevity (100+)", &report.longevity_check),
                ];
            }
            None => {
                debug!("响应缺少 resilience_report，清空韧性区域");
                region.children.clear();
            }
        }
    }

    fn render_fees(view: &mut ResultView, response: &AnalysisResponse) {
        let fees = &response.fee_relativity;
        set_text(view, FEES_ID, format_currency(fees.total_estimated_fees_10y));
        set_text(view, LIFE_FUNDED_ID, format_currency(fees.total_life_funded_value));
        set_text(view, FEE_NARRATIVE_ID, fees.fee_ratio_narrative.clone());
    }

    fn render_assumptions(view: &mut ResultView, response: &AnalysisResponse) {
        let pretty = serde_json::to_string_pretty(&response.assumptions_log)
            .unwrap_or_else(|_| "{}".to_string());
        set_text(view, ASSUMPTIONS_ID, pretty);
    }
}

fn set_text(view: &mut ResultView, id: &str, content: String) {
    if let Some(region) = find_by_id_mut(&mut view.sections, id) {
        region.children = vec![ViewNode::Text(content)];
    }
}

fn bucket_card(title: &str, bucket: &BucketDetail) -> ViewNode {
    Element::new("div")
        .with_class("bucket-card")
        .child(Element::new("h4").text_child(title).into_node())
        .child(
            Element::new("div")
                .with_class("bucket-val")
                .text_child(format_currency(bucket.target_amount))
                .into_node(),
        )
        .child(
            Element::new("p")
                .with_class("bucket-funded")
                .text_child(format!("Funded: {}", format_currency(bucket.funded_amount)))
                .into_node(),
        )
        .child(
            Element::new("p")
                .with_class("bucket-gap")
                .text_child(format!("Gap: {}", format_currency(bucket.gap)))
                .into_node(),
        )
        .into_node()
}

fn labelled_line(label: &str, content: &str) -> ViewNode {
    Element::new("div")
        .with_class("resilience-line")
        .child(Element::new("strong").text_child(format!("{label}:")).into_node())
        .child(ViewNode::Text(format!(" {content}")))
        .into_node()
}

/// 货币格式化：固定前缀 + 千分位分组的整数
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::*;
    use crate::view::node::find_by_id;

    fn sample_response() -> AnalysisResponse {
        AnalysisResponse {
            true_north: TrueNorth {
                top_3_wants: vec!["travel".into(), "family".into()],
                top_3_dont_wants: vec!["debt".into()],
                true_north_statement: String::new(),
            },
            client_narrative: "A life well planned".to_string(),
            lifeline_register: vec![
                lifeline("Family Car", "Transport", 50000.0),
                lifeline("Holiday Home", "Housing", 800000.0),
                lifeline("Boat", "Lifestyle", 60000.0),
            ],
            capital_requirements: Vec::new(),
            two_numbers: TwoNumbers {
                necessary_life_capital: 1_850_000.0,
                best_life_capital: 2_400_000.0,
                gap_analysis: "Gap of $550,000".to_string(),
            },
            capital_structure: Some(BucketStructure {
                bucket_1: bucket(120_000.0),
                bucket_2: bucket(600_000.0),
                bucket_3: bucket(1_100_000.0),
                explanation: "Three tiers".to_string(),
            }),
            resilience_report: Some(ResilienceReport {
                market_shock_response: "Hold".to_string(),
                health_event_response: "Buffer".to_string(),
                early_death_implication: "Covered".to_string(),
                longevity_check: "Funded to 102".to_string(),
            }),
            fee_relativity: FeeRelativity {
                total_estimated_fees_10y: 185_000.0,
                total_life_funded_value: 3_100_000.0,
                fee_ratio_narrative: "Fees fund 6% of the plan".to_string(),
            },
            assumptions_log: serde_json::json!({"inflation": "3.3%"}),
        }
    }

    fn lifeline(name: &str, category: &str, value: f64) -> LifelineEntry {
        LifelineEntry {
            item_name: name.to_string(),
            category: category.to_string(),
            purchase_value: value,
            purchase_timing: "60".to_string(),
            holding_cost: 1500.0,
            disposal_timing: "80".to_string(),
            disposal_value: 0.0,
        }
    }

    fn bucket(target: f64) -> BucketDetail {
        BucketDetail {
            bucket_name: String::new(),
            purpose: String::new(),
            target_amount: target,
            funded_amount: target / 2.0,
            gap: target / 2.0,
        }
    }

    fn count_registers(view: &ResultView) -> usize {
        view.sections
            .iter()
            .filter(|node| matches!(node, ViewNode::Element(e) if e.id.as_deref() == Some(REGISTER_ID)))
            .count()
    }

    fn register_row_count(view: &ResultView) -> usize {
        let register = find_by_id(&view.sections, REGISTER_ID).unwrap();
        register
            .children
            .iter()
            .find_map(|node| match node {
                ViewNode::Table(table) => Some(table.rows.len()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(1234.0), "$1,234");
        assert_eq!(format_currency(1_850_000.0), "$1,850,000");
        assert_eq!(format_currency(-1234.0), "$-1,234");
    }

    #[test]
    fn test_render_switches_views_and_fills_regions() {
        let mut view = ResultView::new();
        assert!(view.input_visible);
        Renderer::render(&mut view, &sample_response());

        assert!(!view.input_visible);
        assert!(view.result_visible);
        let num1 = find_by_id(&view.sections, NUM1_ID).unwrap();
        assert!(matches!(&num1.children[0], ViewNode::Text(t) if t == "$1,850,000"));
    }

    /// 台账按响应顺序渲染，一条记录一行，不排序不过滤
    #[test]
    fn test_register_renders_rows_in_given_order() {
        let mut view = ResultView::new();
        Renderer::render(&mut view, &sample_response());

        assert_eq!(register_row_count(&view), 3);
        let register = find_by_id(&view.sections, REGISTER_ID).unwrap();
        let table = register
            .children
            .iter()
            .find_map(|n| match n {
                ViewNode::Table(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(table.rows[0][0], "Family Car");
        assert_eq!(table.rows[1][0], "Holiday Home");
        assert_eq!(table.rows[2][0], "Boat");
        assert_eq!(table.rows[0][2], "$50,000");
    }

    /// 幂等性：同一文档渲染两次，只有一个台账容器，内容一致
    #[test]
    fn test_render_twice_is_idempotent() {
        let mut view = ResultView::new();
        let response = sample_response();
        Renderer::render(&mut view, &response);
        let first_rows = register_row_count(&view);

        Renderer::render(&mut view, &response);
        assert_eq!(count_registers(&view), 1);
        assert_eq!(register_row_count(&view), first_rows);
    }

    /// 台账容器插入在假设区块之前
    #[test]
    fn test_register_anchored_before_assumptions() {
        let mut view = ResultView::new();
        Renderer::render(&mut view, &sample_response());

        let ids: Vec<Option<&str>> = view
            .sections
            .iter()
            .map(|node| match node {
                ViewNode::Element(e) => e.id.as_deref(),
                _ => None,
            })
            .collect();
        let register_pos = ids.iter().position(|id| *id == Some(REGISTER_ID)).unwrap();
        let assumptions_pos = ids.iter().position(|id| *id == Some("res_assumptions_card")).unwrap();
        assert_eq!(register_pos + 1, assumptions_pos);
    }

    /// 缺失可选子树不报错，其余区域照常渲染
    #[test]
    fn test_missing_capital_structure_renders_rest() {
        let mut view = ResultView::new();
        let mut response = sample_response();
        response.capital_structure = None;
        Renderer::render(&mut view, &response);

        let buckets = find_by_id(&view.sections, BUCKETS_ID).unwrap();
        assert!(buckets.children.is_empty());
        assert_eq!(register_row_count(&view), 3);
    }

    /// 清空策略：后一次响应缺失可选子树时，前一次渲染的内容被清掉
    #[test]
    fn test_optional_sections_cleared_on_absence() {
        let mut view = ResultView::new();
        Renderer::render(&mut view, &sample_response());
        assert!(!find_by_id(&view.sections, BUCKETS_ID).unwrap().children.is_empty());

        let mut second = sample_response();
        second.capital_structure = None;
        second.resilience_report = None;
        Renderer::render(&mut view, &second);

        assert!(find_by_id(&view.sections, BUCKETS_ID).unwrap().children.is_empty());
        assert!(find_by_id(&view.sections, RESILIENCE_ID).unwrap().children.is_empty());
    }
}
