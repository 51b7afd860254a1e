//! 人生策略录入客户端
//!
//! 财务规划录入工具的客户端：维护动态表单状态，把录入内容聚合成
//! 规范的嵌套请求文档，提交给分析服务，并把响应文档幂等地渲染成
//! 结果视图，最后可以导出分页打印快照换取 PDF。
//!
//! # 架构
//!
//! 采用分层设计：
//!
//! - **基础设施层** (`config`, `error`, `utils`): 配置、错误类型、日志
//! - **表单层** (`form`, `models::schema`): 控件仓库、动态列表、行实例、字段绑定
//! - **视图层** (`view`): 声明式节点树与标记序列化
//! - **业务能力层** (`services`): 聚合器、渲染器、快照构建器、用户告警
//! - **客户端层** (`clients`): 分析服务与文档渲染服务的 HTTP 封装
//! - **工作流层** (`workflow`): 带准入控制的提交 / 导出动作
//! - **编排层** (`app`): 装配以上各层并驱动完整流程

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;
pub mod workflow;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use form::{FieldBindings, FormStore};
pub use models::{AnalysisRequest, AnalysisResponse};
pub use services::{Aggregator, Renderer, ResultView, SnapshotBuilder};
