//! 提交分析流程 - 工作流层
//!
//! 串联一次完整的提交动作：准入检查 → 聚合表单 → 调用分析服务
//! → 渲染结果视图。任一步失败都恰好弹一次告警并中止本次动作，
//! 绝不让错误冒泡到调用方层面变成崩溃。

use anyhow::Result;
use tracing::{error, info};

use crate::clients::AnalyzeClient;
use crate::form::{FieldBindings, FormStore};
use crate::services::{Aggregator, AlertSink, Renderer, ResultView};
use crate::workflow::button_guard::ActionButton;
use crate::workflow::FlowOutcome;

/// 提交失败时展示给用户的统一文案
const SUBMIT_FAILURE_MESSAGE: &str = "Error calculating plan. Please check inputs.";

/// 提交分析流程
pub struct SubmitFlow {
    client: AnalyzeClient,
}

impl SubmitFlow {
    pub fn new(client: AnalyzeClient) -> Self {
        Self { client }
    }

    /// 执行一次提交动作
    ///
    /// 按钮在途时直接拒绝（防重入）；失败路径告警一次后
    /// 返回 `Aborted`，视图保持原样
    ///
    /// # 参数
    /// - `store`: 表单状态
    /// - `bindings`: 字段绑定表
    /// - `view`: 结果视图，仅成功时被写入
    /// - `button`: 提交按钮
    /// - `alerts`: 用户告警接收器
    pub async fn run(
        &self,
        store: &FormStore,
        bindings: &FieldBindings,
        view: &mut ResultView,
        button: &mut ActionButton,
        alerts: &AlertSink,
    ) -> Result<FlowOutcome> {
        if !button.is_enabled() {
            info!("⏸ 提交请求在途，忽略重复触发");
            return Ok(FlowOutcome::Aborted);
        }
        let _guard = button.engage();

        // 聚合在任何输入下都成功（空值走兜底常量），失败只来自服务端
        let request = Aggregator::new(store, bindings).collect();
        info!("📋 请求文档聚合完成，准备提交分析");

        match self.client.analyze(&request).await {
            Ok(response) => {
                Renderer::render(view, &response);
                Ok(FlowOutcome::Completed)
            }
            Err(e) => {
                error!("❌ 分析流程失败: {:?}", e);
                alerts.alert(SUBMIT_FAILURE_MESSAGE);
                Ok(FlowOutcome::Aborted)
            }
        }
    }
}
