//! 用户告警服务 - 业务能力层
//!
//! 每个失败动作恰好向用户弹一次 alert，不重试、不升级。
//! 没有真实对话框环境时记录告警内容，供调用方与测试检查。

use std::sync::Mutex;

use tracing::warn;

/// 用户告警接收器
#[derive(Debug, Default)]
pub struct AlertSink {
    alerts: Mutex<Vec<String>>,
}

impl AlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 弹出一条用户可见的告警
    pub fn alert(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("🔔 ALERT: {}", message);
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).push(message);
    }

    /// 最近一条告警
    pub fn last(&self) -> Option<String> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }

    /// 告警总数
    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
