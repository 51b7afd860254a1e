//! 工作流层
//!
//! 把表单、聚合、客户端、渲染串成完整的用户动作。
//! 每个动作自带准入控制（按钮守卫）与失败告警，互不干扰。

pub mod button_guard;
pub mod export_flow;
pub mod submit_flow;

pub use button_guard::{ActionButton, ButtonGuard};
pub use export_flow::ExportFlow;
pub use submit_flow::SubmitFlow;

/// 单次动作的结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 动作完整执行
    Completed,
    /// 动作被拒绝或中途失败，状态已恢复
    Aborted,
}
