//! 分析服务客户端
//!
//! 封装与分析服务的调用逻辑：提交请求文档，取回响应文档。

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use crate::models::request::AnalysisRequest;
use crate::models::response::AnalysisResponse;
use crate::utils::logging::truncate_text;

/// 分析服务客户端
pub struct AnalyzeClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyzeClient {
    /// 创建新的分析客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// 提交请求文档并解析响应文档
    ///
    /// 只有 HTTP 200 视为成功，其余状态一律按通用失败处理
    ///
    /// # 参数
    /// - `request`: 聚合后的请求文档
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let url = format!("{}/api/analyze", self.base_url);
        info!("📤 正在提交分析请求: {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("分析服务请求失败: {url}"))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::service_failure("/api/analyze", status.as_u16()).into());
        }

        let document: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| AppError::bad_response_body("/api/analyze", e))?;

        debug!(
            "✓ 分析响应解析成功，台账 {} 条，叙事: {}",
            document.lifeline_register.len(),
            truncate_text(&document.client_narrative, 60)
        );
        Ok(document)
    }
}
