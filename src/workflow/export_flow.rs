//! 导出打印文档流程 - 工作流层
//!
//! 串联一次完整的导出动作：准入检查 → 构建打印快照 → 调用渲染
//! 服务 → 以固定文件名落盘。失败恰好告警一次并中止，结果视图
//! 不受任何影响。

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::clients::PdfClient;
use crate::services::{AlertSink, ResultView, SnapshotBuilder};
use crate::workflow::button_guard::ActionButton;
use crate::workflow::FlowOutcome;

/// 导出失败时展示给用户的统一文案
const EXPORT_FAILURE_MESSAGE: &str = "Server failed to generate PDF. Check inputs.";

/// 导出打印文档流程
pub struct ExportFlow {
    client: PdfClient,
    output_path: String,
}

impl ExportFlow {
    /// # 参数
    /// - `output_path`: 固定的落盘文件名，不随内容变化
    pub fn new(client: PdfClient, output_path: impl Into<String>) -> Self {
        Self {
            client,
            output_path: output_path.into(),
        }
    }

    /// 执行一次导出动作
    ///
    /// 快照构建是纯函数，失败只来自渲染服务或落盘
    pub async fn run(
        &self,
        view: &ResultView,
        button: &mut ActionButton,
        alerts: &AlertSink,
    ) -> Result<FlowOutcome> {
        if !button.is_enabled() {
            info!("⏸ 导出请求在途，忽略重复触发");
            return Ok(FlowOutcome::Aborted);
        }
        let _guard = button.engage();

        let snapshot = SnapshotBuilder::build(view);
        info!("📸 打印快照构建完成，标记 {} 字节", snapshot.markup.len());

        match self.export(&snapshot).await {
            Ok(()) => {
                info!("✓ 打印文档已保存: {}", self.output_path);
                Ok(FlowOutcome::Completed)
            }
            Err(e) => {
                error!("❌ 导出流程失败: {:?}", e);
                alerts.alert(EXPORT_FAILURE_MESSAGE);
                Ok(FlowOutcome::Aborted)
            }
        }
    }

    async fn export(&self, snapshot: &crate::services::Snapshot) -> Result<()> {
        let bytes = self.client.render_document(snapshot).await?;
        tokio::fs::write(Path::new(&self.output_path), &bytes)
            .await
            .with_context(|| format!("写入文档失败: {}", self.output_path))?;
        Ok(())
    }
}
