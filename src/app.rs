//! 应用编排层
//!
//! 负责整体流程控制：初始化表单与视图、装配客户端与工作流、
//! 依次执行提交分析与导出打印文档两个动作，并把结果落盘。

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::clients::{AnalyzeClient, PdfClient};
use crate::config::Config;
use crate::form::{FieldBindings, FormStore};
use crate::models::loaders::intake::load_intake_file;
use crate::services::{AlertSink, ResultView};
use crate::utils::logging;
use crate::view::markup::write_document;
use crate::workflow::{ActionButton, ExportFlow, FlowOutcome, SubmitFlow};

/// 应用主结构
pub struct App {
    config: Config,
    store: FormStore,
    bindings: FieldBindings,
    view: ResultView,
    alerts: AlertSink,
}

impl App {
    /// 初始化应用
    ///
    /// 登记宿主控件、种入演示数据，随后尝试加载录入文件覆盖。
    /// 录入文件不存在时静默跳过，格式错误则视为启动失败。
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("初始化日志文件失败: {}", config.output_log_file))?;
        logging::log_startup(&config.api_base_url);

        let mut store = FormStore::with_host_controls();

        // 录入文件优先；没有时种入演示数据，两者不叠加
        if Path::new(&config.intake_file).exists() {
            load_intake_file(&config.intake_file, &mut store).await?;
        } else {
            info!("📄 未找到录入文件 {}，使用演示数据", config.intake_file);
            seed_example_rows(&mut store);
        }

        info!(
            "✓ 表单初始化完成，动态列表 {} 个",
            store.lists().count()
        );
        if config.verbose_logging {
            for list in store.lists() {
                info!("📝 列表 {}: {} 行", list.name(), list.len());
            }
        }

        Ok(Self {
            config,
            store,
            bindings: FieldBindings::new(),
            view: ResultView::new(),
            alerts: AlertSink::new(),
        })
    }

    /// 执行完整的分析 + 导出流程
    pub async fn run(&mut self) -> Result<()> {
        let submit_flow = SubmitFlow::new(AnalyzeClient::new(&self.config));
        let mut submit_button = ActionButton::new(
            "Generate Life Strategy ➞",
            "Consulting Life Strategist (approx 30s)...",
        );

        let outcome = submit_flow
            .run(
                &self.store,
                &self.bindings,
                &mut self.view,
                &mut submit_button,
                &self.alerts,
            )
            .await?;

        if outcome == FlowOutcome::Aborted {
            warn!("⚠️ 分析动作未完成，跳过导出");
            return Ok(());
        }

        self.write_result_file().await?;

        let export_flow = ExportFlow::new(
            PdfClient::new(&self.config),
            self.config.pdf_output_file.clone(),
        );
        let mut export_button = ActionButton::new("Download PDF Report", "Generating PDF...");

        let export_outcome = export_flow
            .run(&self.view, &mut export_button, &self.alerts)
            .await?;

        info!("{}", "=".repeat(60));
        info!(
            "📊 运行结束: 结果文件 {}, 导出 {}",
            self.config.result_html_file,
            match export_outcome {
                FlowOutcome::Completed => format!("已保存 {}", self.config.pdf_output_file),
                FlowOutcome::Aborted => "失败".to_string(),
            }
        );
        info!("{}", "=".repeat(60));
        Ok(())
    }

    /// 把结果视图序列化为标记文本并落盘
    async fn write_result_file(&self) -> Result<()> {
        let markup = write_document(&self.view.sections, "results-container");
        tokio::fs::write(&self.config.result_html_file, markup)
            .await
            .with_context(|| format!("写入结果文件失败: {}", self.config.result_html_file))?;
        info!("✓ 结果视图已保存: {}", self.config.result_html_file);
        Ok(())
    }
}

/// 种入演示数据：与宿主页面首次打开时的预填内容一致
fn seed_example_rows(store: &mut FormStore) {
    if let Some(cars) = store.list_mut("carList") {
        cars.add(&[
            ("name", "Family Car"),
            ("purchase_value", "50000"),
            ("start_age", "60"),
            ("replacement_cycle", "5"),
            ("end_age", "85"),
        ]);
        cars.add(&[
            ("name", "Secondary Car"),
            ("purchase_value", "30000"),
            ("start_age", "60"),
            ("replacement_cycle", "10"),
            ("end_age", "80"),
        ]);
    }

    if let Some(stages) = store.list_mut("stageList") {
        stages.add(&[
            ("name", "Early Active"),
            ("start_age", "60"),
            ("end_age", "75"),
            ("annual_income", "100000"),
        ]);
        stages.add(&[
            ("name", "Late Active"),
            ("start_age", "75"),
            ("end_age", "85"),
            ("annual_income", "80000"),
        ]);
        stages.add(&[
            ("name", "Passive/Frail"),
            ("start_age", "85"),
            ("end_age", "100"),
            ("annual_income", "60000"),
        ]);
    }

    if let Some(barriers) = store.list_mut("barrierList") {
        barriers.add(&[("description", "Time"), ("impact_percentage", "80")]);
        barriers.add(&[("description", "Fear of Running Out"), ("impact_percentage", "60")]);
        barriers.add(&[("description", "Lack of Knowledge"), ("impact_percentage", "40")]);
    }

    if let Some(weddings) = store.list_mut("weddingList") {
        weddings.add(&[
            ("name", "Daughter Wedding"),
            ("purchase_value", "40000"),
            ("purchase_timing", "62"),
        ]);
    }

    if let Some(education) = store.list_mut("educationList") {
        education.add(&[
            ("name", "Grandkids School Fund"),
            ("purchase_value", "20000"),
            ("purchase_timing", "65"),
            ("holding_cost", "20000"),
            ("disposal_timing", "70"),
        ]);
    }
}
