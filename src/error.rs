use thiserror::Error;

/// 应用程序错误类型
///
/// 错误分类遵循三条原则：
/// - 输入缺失 / 无法解析的数值不算错误，静默回退到字段默认值
/// - 网络 / 服务错误向用户弹一次 alert，不重试
/// - 渲染时缺失的可选子树直接跳过，绝不中断整个渲染
#[derive(Debug, Error)]
pub enum AppError {
    /// 外部服务返回了非成功状态
    #[error("服务返回错误状态 ({endpoint}): HTTP {status}")]
    ServiceFailure { endpoint: String, status: u16 },

    /// 外部服务响应体解析失败
    #[error("服务响应解析失败 ({endpoint}): {source}")]
    BadResponseBody {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 表单中不存在指定的列表容器
    #[error("表单缺少列表容器: {name}")]
    MissingList { name: String },

    /// 录入文件解析失败
    #[error("录入文件解析失败 ({path}): {source}")]
    IntakeParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AppError {
    /// 创建服务状态错误
    pub fn service_failure(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::ServiceFailure {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// 创建响应体解析错误
    pub fn bad_response_body(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::BadResponseBody {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建录入文件解析错误
    pub fn intake_parse_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::IntakeParseFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
