//! 文档渲染服务客户端
//!
//! 把快照（标记文本 + 样式表）交给外部渲染服务，
//! 成功时返回不透明的二进制文档。

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::services::snapshot::Snapshot;

/// 渲染服务的请求体
#[derive(Debug, Serialize)]
struct PdfRequest<'a> {
    html_content: &'a str,
    css_content: &'a str,
}

/// 文档渲染服务客户端
pub struct PdfClient {
    http: reqwest::Client,
    base_url: String,
}

impl PdfClient {
    /// 创建新的渲染客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// 提交快照，取回二进制文档
    ///
    /// # 参数
    /// - `snapshot`: 导出快照
    pub async fn render_document(&self, snapshot: &Snapshot) -> Result<Vec<u8>> {
        let url = format!("{}/api/pdf", self.base_url);
        info!("📤 正在提交文档渲染请求: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&PdfRequest {
                html_content: &snapshot.markup,
                css_content: &snapshot.stylesheet,
            })
            .send()
            .await
            .with_context(|| format!("文档渲染服务请求失败: {url}"))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::service_failure("/api/pdf", status.as_u16()).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::bad_response_body("/api/pdf", e))?;

        info!("✓ 文档渲染完成，{} 字节", bytes.len());
        Ok(bytes.to_vec())
    }
}
