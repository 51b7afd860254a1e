use life_strategy_intake::config::Config;
use life_strategy_intake::clients::{AnalyzeClient, PdfClient};
use life_strategy_intake::form::{FieldBindings, FormStore};
use life_strategy_intake::models::response::AnalysisResponse;
use life_strategy_intake::services::{Aggregator, AlertSink, Renderer, ResultView, SnapshotBuilder};
use life_strategy_intake::utils::logging;
use life_strategy_intake::view::markup::write_document;
use life_strategy_intake::workflow::{ActionButton, ExportFlow, FlowOutcome, SubmitFlow};

/// 一份覆盖全部区域的响应文档样例
fn sample_response_json() -> serde_json::Value {
    serde_json::json!({
        "true_north": {
            "top_3_wants": ["Travel", "Family time", "Golf"],
            "top_3_dont_wants": ["Aged care stress"],
            "true_north_statement": "Live fully, travel often."
        },
        "client_narrative": "Alex and Sam want an active first decade of retirement.",
        "lifeline_register": [
            {
                "item_name": "Family Car",
                "category": "Transport",
                "purchase_value": 50000.0,
                "purchase_timing": "60 (every 5 yrs)",
                "holding_cost": 1500.0,
                "disposal_timing": "85",
                "disposal_value": 0.0
            },
            {
                "item_name": "Holiday Home",
                "category": "Housing",
                "purchase_value": 800000.0,
                "purchase_timing": "60",
                "holding_cost": 12000.0,
                "disposal_timing": "80",
                "disposal_value": 900000.0
            }
        ],
        "two_numbers": {
            "necessary_life_capital": 1850000.0,
            "best_life_capital": 2400000.0,
            "gap_analysis": "A gap of $550,000 separates necessary from best."
        },
        "capital_structure": {
            "bucket_1": {"bucket_name": "Stability", "purpose": "3 yrs income", "target_amount": 240000.0, "funded_amount": 240000.0, "gap": 0.0},
            "bucket_2": {"bucket_name": "Momentum", "purpose": "yrs 4-10", "target_amount": 700000.0, "funded_amount": 500000.0, "gap": 200000.0},
            "bucket_3": {"bucket_name": "Growth", "purpose": "yrs 10+", "target_amount": 1460000.0, "funded_amount": 1100000.0, "gap": 360000.0},
            "explanation": "Three-bucket split keeps early years safe."
        },
        "resilience_report": {
            "market_shock_response": "Bucket 1 covers three years.",
            "health_event_response": "Buffer absorbs first events.",
            "early_death_implication": "Survivor remains funded.",
            "longevity_check": "Funded past 100."
        },
        "fee_relativity": {
            "total_estimated_fees_10y": 185000.0,
            "total_life_funded_value": 3100000.0,
            "fee_ratio_narrative": "Fees equal 6% of funded life value."
        },
        "assumptions_log": {"inflation": "3.3%", "growth_return": "8.0%"}
    })
}

/// 端到端（不经网络）：表单 → 聚合 → 渲染 → 快照
#[test]
fn test_form_to_snapshot_pipeline() {
    logging::init();

    let mut store = FormStore::with_host_controls();
    store.set_value("p1_name", "Alex");
    store.set_value("asset_super", "850000");
    if let Some(cars) = store.list_mut("carList") {
        cars.add(&[("name", "Family Car"), ("purchase_value", "50000")]);
    }

    let bindings = FieldBindings::new();
    let request = Aggregator::new(&store, &bindings).collect();
    assert_eq!(request.profile.partner1_name, "Alex");
    assert_eq!(request.context.super_balance, 850000.0);
    assert_eq!(request.lifestyle.cars.len(), 1);

    let response: AnalysisResponse = serde_json::from_value(sample_response_json()).unwrap();
    let mut view = ResultView::new();
    Renderer::render(&mut view, &response);
    assert!(view.result_visible);

    let markup = write_document(&view.sections, "results-container");
    assert!(markup.contains("$1,850,000"));
    assert!(markup.contains("Family Car"));
    assert!(markup.contains("download_pdf_btn"));

    // 打印快照剔除导出按钮，控件全部转为静态文本
    let snapshot = SnapshotBuilder::build(&view);
    assert!(!snapshot.markup.contains("download_pdf_btn"));
    assert!(snapshot.stylesheet.contains("@page"));
}

/// 渲染两次，序列化结果逐字节一致（幂等性的外部可见形式）
#[test]
fn test_repeated_render_produces_identical_markup() {
    let response: AnalysisResponse = serde_json::from_value(sample_response_json()).unwrap();
    let mut view = ResultView::new();

    Renderer::render(&mut view, &response);
    let first = write_document(&view.sections, "results-container");

    Renderer::render(&mut view, &response);
    let second = write_document(&view.sections, "results-container");

    assert_eq!(first, second);
}

/// 可选子树缺失的响应也能完整走通渲染与快照
#[test]
fn test_minimal_response_renders_and_snapshots() {
    let mut json = sample_response_json();
    json.as_object_mut().unwrap().remove("capital_structure");
    json.as_object_mut().unwrap().remove("resilience_report");
    let response: AnalysisResponse = serde_json::from_value(json).unwrap();

    let mut view = ResultView::new();
    Renderer::render(&mut view, &response);
    let snapshot = SnapshotBuilder::build(&view);
    assert!(snapshot.markup.contains("The Lifeline Register"));
}

/// 提交失败：恰好一条告警，按钮恢复，视图停留在录入态
#[tokio::test]
async fn test_submit_failure_leaves_view_untouched() {
    logging::init();
    let config = Config {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    };

    let store = FormStore::with_host_controls();
    let bindings = FieldBindings::new();
    let mut view = ResultView::new();
    let mut button = ActionButton::new("Generate Life Strategy ➞", "Consulting...");
    let alerts = AlertSink::new();

    let flow = SubmitFlow::new(AnalyzeClient::new(&config));
    let outcome = flow
        .run(&store, &bindings, &mut view, &mut button, &alerts)
        .await
        .expect("流程本身不应报错");

    assert_eq!(outcome, FlowOutcome::Aborted);
    assert_eq!(alerts.count(), 1);
    assert!(button.is_enabled());
    assert!(view.input_visible);
}

/// 导出失败：恰好一条告警，不落盘
#[tokio::test]
async fn test_export_failure_writes_nothing() {
    logging::init();
    let config = Config {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    };

    let output = "integration_never_written.pdf";
    let flow = ExportFlow::new(PdfClient::new(&config), output);
    let view = ResultView::new();
    let mut button = ActionButton::new("Download PDF Report", "Generating PDF...");
    let alerts = AlertSink::new();

    let outcome = flow.run(&view, &mut button, &alerts).await.expect("流程本身不应报错");
    assert_eq!(outcome, FlowOutcome::Aborted);
    assert_eq!(alerts.count(), 1);
    assert!(!std::path::Path::new(output).exists());
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_live_analyze_roundtrip() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let mut store = FormStore::with_host_controls();
    store.set_value("p1_name", "Alex");
    if let Some(cars) = store.list_mut("carList") {
        cars.add(&[("name", "Family Car"), ("purchase_value", "50000")]);
    }

    let bindings = FieldBindings::new();
    let request = Aggregator::new(&store, &bindings).collect();

    let client = AnalyzeClient::new(&config);
    let response = client.analyze(&request).await.expect("分析请求失败");

    assert!(!response.lifeline_register.is_empty(), "台账不应为空");
}

#[tokio::test]
#[ignore]
async fn test_live_pdf_export() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let response: AnalysisResponse = serde_json::from_value(sample_response_json()).unwrap();
    let mut view = ResultView::new();
    Renderer::render(&mut view, &response);

    let snapshot = SnapshotBuilder::build(&view);
    let client = PdfClient::new(&config);
    let bytes = client.render_document(&snapshot).await.expect("文档渲染失败");

    assert!(!bytes.is_empty(), "渲染结果不应为空");
}
